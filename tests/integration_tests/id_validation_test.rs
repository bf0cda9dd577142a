// tests/integration_tests/id_validation_test.rs
use super::common::Project;
use agent_checklist::Command;
use anyhow::Result;

#[test]
fn test_complete_rejects_non_numeric_id() -> Result<()> {
    let project = Project::new()?;
    project.add("keep open")?;

    let output = project.run(Command::Complete {
        id: String::from("abc"),
    })?;

    assert_eq!(output.stderr, "Invalid task ID.\n");
    assert!(output.stdout.is_empty());
    assert_eq!(project.list()?, "[ ] 1: keep open\n");
    Ok(())
}

#[test]
fn test_remove_rejects_id_without_leading_digits() -> Result<()> {
    let project = Project::new()?;
    project.add("keep me")?;

    let output = project.run(Command::Remove {
        id: String::from("x1"),
    })?;

    assert_eq!(output.stderr, "Invalid task ID.\n");
    assert!(output.stdout.is_empty());
    assert_eq!(project.list()?, "[ ] 1: keep me\n");
    Ok(())
}

#[test]
fn test_id_with_surrounding_whitespace_is_accepted() -> Result<()> {
    let project = Project::new()?;
    project.add("padded")?;

    let output = project.run(Command::Complete {
        id: String::from(" 1 "),
    })?;

    assert_eq!(output.stdout, "Marked task 1 as completed.\n");
    assert_eq!(project.list()?, "[x] 1: padded\n");
    Ok(())
}

#[test]
fn test_complete_uses_leading_digits_of_decimal_id() -> Result<()> {
    let project = Project::new()?;
    project.add("first")?;
    project.add("second")?;

    let output = project.run(Command::Complete {
        id: String::from("1.5"),
    })?;

    assert_eq!(output.stdout, "Marked task 1 as completed.\n");
    assert!(output.stderr.is_empty());
    assert_eq!(project.list()?, "[x] 1: first\n[ ] 2: second\n");
    Ok(())
}

#[test]
fn test_remove_ignores_text_after_leading_digits() -> Result<()> {
    let project = Project::new()?;
    project.add("first")?;
    project.add("second")?;

    let output = project.run(Command::Remove {
        id: String::from("2abc"),
    })?;

    assert_eq!(output.stdout, "Removed task 2.\n");
    assert!(output.stderr.is_empty());
    assert_eq!(project.list()?, "[ ] 1: first\n");
    Ok(())
}
