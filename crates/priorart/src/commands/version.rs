pub fn run() -> anyhow::Result<()> {
    println!("priorart {}", env!("CARGO_PKG_VERSION"));
    println!("Reality check engine for product ideas");
    Ok(())
}
