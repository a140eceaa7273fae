use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::spinner;

/// Look up one app's store listing.
pub(crate) fn run_store(
    app_id: u64,
    json: bool,
    api_url: Option<String>,
    quiet: bool,
) -> Result<(), CliError> {
    let client = super::connect(api_url)?;

    let pb = spinner::loading(&format!("Looking up app {}...", app_id), quiet || json);
    let result = super::block_on(client.store(app_id))?;
    pb.finish_and_clear();
    let game = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
        return Ok(());
    }

    log::info!(
        "{} {}",
        game.name.if_supports_color(Stdout, |t| t.bold()),
        format!("(app {})", game.appid).if_supports_color(Stdout, |t| t.dimmed()),
    );
    match &game.price_overview {
        Some(price) if price.discount_percent > 0 => log::info!(
            "  Price: {} {}",
            price.final_formatted,
            format!("-{}%", price.discount_percent).if_supports_color(Stdout, |t| t.green()),
        ),
        Some(price) => log::info!("  Price: {}", price.final_formatted),
        None => log::info!("  Price: {}", "n/a".if_supports_color(Stdout, |t| t.dimmed())),
    }
    if !game.header_image.is_empty() {
        log::info!(
            "  {}",
            game.header_image.if_supports_color(Stdout, |t| t.dimmed())
        );
    }
    if !game.short_description.is_empty() {
        crate::log_blank();
        log::info!("  {}", game.short_description);
    }

    Ok(())
}
