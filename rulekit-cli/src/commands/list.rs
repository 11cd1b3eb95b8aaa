//! The `list` command: print the supported selection catalogs.

use console::style;
use rulekit::{Framework, ProjectType, QualityRule, TaskType, Technology};

/// Print every identifier `generate` and profiles accept.
#[derive(Debug)]
pub struct ListCommand;

impl ListCommand {
    /// Execute the command.
    pub fn execute() {
        println!("{}", style("Frameworks").bold().underlined());
        for framework in Framework::ALL {
            let files: Vec<&str> = framework
                .documents()
                .iter()
                .map(|doc| doc.filename)
                .collect();
            println!(
                "  {} {:<12} {}",
                style(format!("{:<16}", framework.id())).cyan(),
                framework.label(),
                style(files.join(", ")).dim()
            );
        }

        println!();
        println!("{}", style("Technologies").bold().underlined());
        for tech in Technology::ALL {
            println!(
                "  {} {}",
                style(format!("{:<16}", tech.id())).cyan(),
                tech.label()
            );
        }

        println!();
        println!("{}", style("Project types").bold().underlined());
        for project_type in ProjectType::ALL {
            println!(
                "  {} {}",
                style(format!("{:<16}", project_type.id())).cyan(),
                project_type.label()
            );
        }

        println!();
        println!("{}", style("Task types").bold().underlined());
        for task in TaskType::ALL {
            println!(
                "  {} {:<20} {}",
                style(format!("{:<16}", task.id())).cyan(),
                task.label(),
                style(task.document().filename).dim()
            );
        }

        println!();
        println!("{}", style("Quality rules").bold().underlined());
        let known_rules = QualityRule::KNOWN;
        for rule in &known_rules {
            if rule.example().is_some() {
                println!(
                    "  {:<44} {}",
                    rule.label(),
                    style("(adds an example block)").dim()
                );
            } else {
                println!("  {}", rule.label());
            }
        }
        println!();
        println!(
            "Quality rules are free text; the labels above additionally toggle \
             their example blocks when matched exactly."
        );
    }
}
