use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let app = vitrine::default()?;
    app.run()
}
