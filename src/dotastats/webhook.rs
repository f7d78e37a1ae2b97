use std::time::Duration;

use anyhow::{bail, format_err, Context, Result};
use log::{debug, info};
use serenity::all::{Http, Webhook};

use super::messages::Report;

/// Posts the report through a Discord webhook. The whole exchange is bounded by `timeout`.
pub async fn deliver(webhook_url: &str, report: &Report, timeout: Duration) -> Result<()> {
    if webhook_url.trim().is_empty() {
        bail!("Discord webhook URL is not configured");
    }
    // Webhook execution is authorised by the token embedded in its URL
    let http = Http::new("");
    let send = async {
        let webhook = Webhook::from_url(&http, webhook_url)
            .await
            .context("Cannot reach Discord webhook")?;
        debug!("Discord: webhook {} found, sending report", webhook.id);
        webhook
            .execute(&http, false, report.to_execute_webhook())
            .await
            .context("Discord webhook execution failed")?;
        anyhow::Ok(())
    };
    tokio::time::timeout(timeout, send)
        .await
        .map_err(|_| format_err!("Discord webhook timed out after {timeout:?}"))??;
    info!("Discord: report with {} players sent", report.embed.fields.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dotastats::messages::empty_report;
    use chrono::Local;

    #[tokio::test]
    async fn missing_url_is_an_error() {
        let err = deliver("  ", &empty_report(&Local::now()), Duration::from_secs(1))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Discord webhook URL is not configured");
    }
}
