//! The `hsktrainer init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create hsktrainer.toml
    if std::path::Path::new("hsktrainer.toml").exists() {
        println!("hsktrainer.toml already exists, skipping.");
    } else {
        std::fs::write("hsktrainer.toml", SAMPLE_CONFIG)?;
        println!("Created hsktrainer.toml");
    }

    // Create sample deck
    let deck_path = std::path::Path::new("vocabulary.toml");
    if deck_path.exists() {
        println!("vocabulary.toml already exists, skipping.");
    } else {
        std::fs::write(deck_path, SAMPLE_DECK)?;
        println!("Created vocabulary.toml");
    }

    println!("\nNext steps:");
    println!("  1. Point `vocabulary` in hsktrainer.toml at your workbook (one sheet per level)");
    println!("  2. Run: hsktrainer validate");
    println!("  3. Run: hsktrainer play --level HSK1");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# hsktrainer configuration

# Workbook with sheets HSK1..HSK6 (columns B, D, E, G), or a TOML deck.
vocabulary = "vocabulary.toml"

default_level = "HSK1"

# Success animation shown after a correct answer.
animation = true
animation_url = "https://assets10.lottiefiles.com/packages/lf20_yghbqt2z.json"
request_timeout_secs = 10
"#;

const SAMPLE_DECK: &str = r#"[[HSK1]]
headword = "你好"
meaning = "hello"
example = "你好吗？"
example_meaning = "How are you?"

[[HSK1]]
headword = "谢谢"
meaning = "thank you"
example = "谢谢你的帮助。"
example_meaning = "Thank you for your help."

[[HSK1]]
headword = "朋友"
meaning = "friend"
example = "他是我的好朋友。"
example_meaning = "He is my good friend."

[[HSK2]]
headword = "旅游"
meaning = "to travel"
example = "我喜欢旅游。"
example_meaning = "I like to travel."

[[HSK2]]
headword = "准备"
meaning = "to prepare"

[[HSK3]]
headword = "经常"
meaning = "often"
example = "我经常去图书馆。"
example_meaning = "I often go to the library."
"#;
