fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    stockroom_demo::run(&mut out)?;

    tracing::info!("demo finished");
    Ok(())
}
