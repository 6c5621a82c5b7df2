use anyhow::Result;
use superdiff::{Differ, Settings};

fn main() -> Result<()> {
    env_logger::init();

    let old_text = "Spam  egg\r\n\r\n  \r\nSAUSAGE\t\nbacon \n";
    let new_text = "spam egg\nsausage\n  bacon\n";

    println!("=== Demonstrating flexible comparisons ===\n");

    let examples = [
        ("1. Default settings", Settings::new()),
        (
            "2. Ignoring case and whitespace changes",
            Settings::new()
                .ignore_case(true)
                .ignore_non_newline_whitespace_changes(true),
        ),
        (
            "3. Also ignoring newline changes and blank lines",
            Settings::new()
                .ignore_case(true)
                .ignore_non_newline_whitespace_changes(true)
                .ignore_newline_changes(true)
                .ignore_blank_lines(true),
        ),
        (
            "4. Also ignoring leading and trailing whitespace",
            Settings::new()
                .ignore_case(true)
                .ignore_non_newline_whitespace_changes(true)
                .ignore_newline_changes(true)
                .ignore_blank_lines(true)
                .ignore_leading_whitespace(true)
                .ignore_trailing_whitespace(true),
        ),
    ];

    for (title, settings) in examples {
        println!("{}:", title);
        let differ = Differ::new(settings);

        for line in differ.parse(old_text) {
            println!("  parsed {:?} -> {:?}", line.original_text(), line.transformed_text());
        }

        let diff = differ.compare(old_text, new_text);
        if diff.is_empty() {
            println!("  no differences");
        }
        for record in diff {
            println!("  {:<8} {:?} | {:?}", record.tag.to_string(), record.left, record.right);
        }
        println!();
    }

    Ok(())
}
