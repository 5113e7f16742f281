pub fn run() -> anyhow::Result<()> {
    println!("migracheck {}", env!("CARGO_PKG_VERSION"));
    println!("Daily migraine log with monthly and yearly views");
    Ok(())
}
