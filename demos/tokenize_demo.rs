/// Vietnamese tokenization demo
///
/// Builds a small dictionary on disk, then walks through the main API:
/// - the streaming `tokenize` procedure with different config maps
/// - the `tokens` list function
/// - the analyzer registry
use std::collections::HashMap;
use std::fs;

use serde_json::json;
use vitext::analysis::analyzer;
use vitext::procedures;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("\n=== vitext demo ===\n");

    // A scratch dictionary; real deployments point dictPath at the
    // installed word lists instead.
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("words.txt"),
        "cộng hòa\nxã hội\nchủ nghĩa\nviệt nam\ncông nghệ\nthông tin\n",
    )?;
    let dict_path = dir.path().to_str().unwrap().to_string();

    let mut config = HashMap::new();
    config.insert("dictPath".to_string(), json!(dict_path));

    let text = "Cộng hòa Xã hội chủ nghĩa Việt Nam";
    println!("tokenize(\"{}\"):", text);
    for row in procedures::tokenize(text, &config)? {
        println!(
            "  {:<12} {:>4}..{:<4} {}",
            row.token_type, row.start_position, row.end_position, row.token
        );
    }

    let text = "Xem https://vnexpress.net/cong-nghe hoặc email test@example.com.";
    println!("\ntokens(\"{}\"):", text);
    println!("  whole: {:?}", procedures::tokens(text, &config)?);

    config.insert("splitURL".to_string(), json!(true));
    println!("  splitURL: {:?}", procedures::tokens(text, &config)?);

    println!("\nregistered analyzers: {:?}", analyzer::global().names());

    Ok(())
}
