use anyhow::Result;

fn main() -> Result<()> {
    // Exit status only reflects whether the check ran, never what it found
    vocab_check::app::run()?;
    Ok(())
}
