use chrono::{DateTime, Local};
use rankengine::{LastPlace, PlayerRecord};
use serde::Serialize;
use serenity::all::{CreateEmbed, CreateEmbedFooter, ExecuteWebhook};

use crate::utils;

const REPORT_TITLE: &str = "🏆 Dota 2 Daily Stats";
const REPORT_CONTENT: &str = "📊 **Team stats - OpenDota**";
const REPORT_COLOUR: u32 = 3447003;
const REPORT_THUMBNAIL: &str = "https://www.opendota.com/static/images/logos/opendota.png";
const ERROR_TITLE: &str = "❌ Could not fetch stats";
const ERROR_DESCRIPTION: &str = "No player statistics could be fetched from OpenDota.";
const ERROR_COLOUR: u32 = 16711680;

/// Everything that ends up in the Discord message, independent of the Discord client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub content: Option<String>,
    pub embed: ReportEmbed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEmbed {
    pub title: String,
    pub description: Option<String>,
    pub colour: u32,
    pub thumbnail: Option<String>,
    pub fields: Vec<ReportField>,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// `ranked` is expected best first. An empty roster produces the error report.
pub fn stats_report(
    ranked: &[PlayerRecord],
    last_place: Option<&LastPlace>,
    now: &DateTime<Local>,
) -> Report {
    if ranked.is_empty() {
        return empty_report(now);
    }
    Report {
        content: Some(String::from(REPORT_CONTENT)),
        embed: ReportEmbed {
            title: String::from(REPORT_TITLE),
            description: last_place.map(last_place_line),
            colour: REPORT_COLOUR,
            thumbnail: Some(String::from(REPORT_THUMBNAIL)),
            fields: ranked.iter().map(player_field).collect(),
            footer: footer(now),
        },
    }
}

pub fn empty_report(now: &DateTime<Local>) -> Report {
    Report {
        content: None,
        embed: ReportEmbed {
            title: String::from(ERROR_TITLE),
            description: Some(String::from(ERROR_DESCRIPTION)),
            colour: ERROR_COLOUR,
            thumbnail: None,
            fields: Vec::new(),
            footer: footer(now),
        },
    }
}

fn player_field(record: &PlayerRecord) -> ReportField {
    let lines = [
        format!("**Medal:** {}", record.medal),
        format!("**Matches:** {}", record.total_matches()),
        format!("**Wins:** {}", record.wins),
        format!("**Losses:** {}", record.losses),
        format!("**Winrate:** {}%", record.win_rate),
    ];
    ReportField {
        name: record.name.clone(),
        value: utils::join(lines, "\n"),
        inline: true,
    }
}

fn last_place_line(last_place: &LastPlace) -> String {
    format!("🥄 **{}**: {}", last_place.player.name, last_place.phrase)
}

fn footer(now: &DateTime<Local>) -> String {
    format!("Updated {}", now.format("%d/%m/%Y %H:%M"))
}

impl Report {
    pub fn to_execute_webhook(&self) -> ExecuteWebhook {
        let embed = &self.embed;
        let mut create_embed = CreateEmbed::new()
            .title(&embed.title)
            .colour(embed.colour)
            .fields(
                embed
                    .fields
                    .iter()
                    .map(|f| (f.name.clone(), f.value.clone(), f.inline)),
            )
            .footer(CreateEmbedFooter::new(&embed.footer));
        if let Some(description) = &embed.description {
            create_embed = create_embed.description(description);
        }
        if let Some(thumbnail) = &embed.thumbnail {
            create_embed = create_embed.thumbnail(thumbnail);
        }
        let mut builder = ExecuteWebhook::new().embed(create_embed);
        if let Some(content) = &self.content {
            builder = builder.content(content);
        }
        builder
    }
}
