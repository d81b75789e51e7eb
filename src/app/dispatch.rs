use anyhow::Result;
use tracing::warn;

use crate::cli::commands::{Cli, Commands};
use crate::config::Config;
use crate::events::{CsvEventSink, Event, EventSink};
use crate::prompt;
use crate::providers::{Provider, create_provider};
use crate::scoring::score_title;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let sink = CsvEventSink::new(&config.event_log_path());

    match cli.command {
        Commands::Analyze {
            title,
            offline,
            temperature,
        } => run_analyze(&config, &sink, &title, offline, temperature).await,
        Commands::Ideas { description } => {
            run_ideas(&config, &sink, description.as_deref()).await
        }
    }
}

/// Rule-engine score first, then (unless offline or blank) the AI critique.
async fn run_analyze(
    config: &Config,
    sink: &dyn EventSink,
    title: &str,
    offline: bool,
    temperature: Option<f64>,
) -> Result<()> {
    let analysis = score_title(title);

    println!("Narrative score: {} / 10", analysis.score);
    println!();
    for entry in &analysis.feedback {
        println!("  {entry}");
    }

    if !offline && !title.trim().is_empty() {
        let provider = create_provider(config);
        let critique = ai_critique(provider.as_ref(), sink, config, title, temperature).await;
        println!();
        println!("AI critique:");
        println!("{critique}");
    }

    record_event(
        sink,
        Event::now("analyze_clicked")
            .with_title(title)
            .with_score(analysis.score),
    );
    Ok(())
}

async fn run_ideas(
    config: &Config,
    sink: &dyn EventSink,
    description: Option<&str>,
) -> Result<()> {
    let provider = create_provider(config);
    let ideas = generate_ideas(provider.as_ref(), sink, config, description).await;

    println!("Headline ideas:");
    for (index, idea) in ideas.iter().enumerate() {
        println!("  {}. {idea}", index + 1);
    }

    record_event(
        sink,
        Event::now("generate_clicked").with_description_provided(description.is_some()),
    );
    Ok(())
}

/// Ask the provider for a critique, substituting the static fallback on
/// failure. Provider failures are logged and recorded, never surfaced.
async fn ai_critique(
    provider: &dyn Provider,
    sink: &dyn EventSink,
    config: &Config,
    title: &str,
    temperature: Option<f64>,
) -> String {
    let request = prompt::critique_prompt(title);
    let temperature = temperature.unwrap_or(config.temperature);

    match provider.complete(&request, &config.model, temperature).await {
        Ok(text) => text,
        Err(err) => {
            warn!("AI critique failed: {err:#}");
            record_event(sink, Event::now("ai_error"));
            prompt::CRITIQUE_FALLBACK.to_string()
        }
    }
}

async fn generate_ideas(
    provider: &dyn Provider,
    sink: &dyn EventSink,
    config: &Config,
    description: Option<&str>,
) -> Vec<String> {
    let request = prompt::ideas_prompt(description);

    match provider
        .complete(&request, &config.model, config.temperature)
        .await
    {
        Ok(raw) => {
            let ideas = prompt::parse_ideas(&raw);
            if ideas.is_empty() {
                fallback_ideas()
            } else {
                ideas
            }
        }
        Err(err) => {
            warn!("idea generation failed: {err:#}");
            record_event(sink, Event::now("ai_error"));
            fallback_ideas()
        }
    }
}

fn fallback_ideas() -> Vec<String> {
    prompt::IDEAS_FALLBACK.iter().map(ToString::to_string).collect()
}

/// Event-log writes must never interrupt the primary flow.
fn record_event(sink: &dyn EventSink, event: Event) {
    if let Err(err) = sink.record(&event) {
        warn!("event log append failed: {err}");
    }
}
