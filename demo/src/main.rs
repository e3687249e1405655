use demo::DemoBuilder;

fn main() -> anyhow::Result<()> {
    demo::logging::init();
    DemoBuilder::from_env()?.run()?;
    Ok(())
}
