use kronkel::{GenerateParams, Palette, generate};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let params = GenerateParams {
        desired_width: 3,
        ..GenerateParams::default()
    };
    for text in ["Ab,", "Kronkelschrift", ""] {
        let k = generate(text, &params, Palette::default())?;
        println!("{}", serde_json::to_string_pretty(&k.summary())?);
    }

    Ok(())
}
