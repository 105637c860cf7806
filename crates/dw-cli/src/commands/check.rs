use colored::Colorize;

pub fn run() -> Result<(), String> {
    let graph = super::load_story()?;
    let issues = graph.validate();

    for issue in &issues {
        let line = issue.to_string();
        if issue.is_error {
            eprintln!("  {}", line.red());
        } else {
            eprintln!("  {}", line.yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    if errors > 0 {
        return Err(format!("story graph has {errors} error(s)"));
    }

    let choices: usize = graph.scenes().map(|s| s.choices().len()).sum();
    let checks = graph
        .scenes()
        .flat_map(|s| s.choices())
        .filter(|c| c.is_checked())
        .count();
    let enemies = graph.scenes().filter(|s| s.enemy().is_some()).count();
    let endings = graph.scenes().filter(|s| s.is_terminal()).count();

    println!("  All checks passed for the built-in storyline.");
    println!(
        "  {} scenes, {choices} choices ({checks} roll checks), {enemies} enemies, {endings} endings",
        graph.len()
    );
    let warnings = issues.len();
    if warnings > 0 {
        println!("  {warnings} warning(s)");
    }

    Ok(())
}
