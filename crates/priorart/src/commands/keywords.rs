use priorart_extract::extract_keywords;
use priorart_lexicon::Lexicon;

pub fn run(idea: &str) -> anyhow::Result<()> {
    let lexicon = Lexicon::builtin();
    let keywords = extract_keywords(&lexicon, idea);
    let output = serde_json::json!({ "keywords": keywords });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_succeeds_on_plain_idea() {
        assert!(run("llm monitoring dashboard").is_ok());
    }

    #[test]
    fn test_run_succeeds_on_degenerate_idea() {
        assert!(run("a the is").is_ok());
    }
}
