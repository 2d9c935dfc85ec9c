use colored::Colorize;

use seobrief::brief::{build_brief, BriefRequest, ContentBrief};
use seobrief::classify::{classify_page, PageClassification};
use seobrief::cli::BriefFormat;
use seobrief::config::Config;
use seobrief::error::{Result, SeoError};
use seobrief::fetch;
use seobrief::page_facts::PageSignals;
use seobrief::topic::{clean_topic, topic_from_url};

/// Normalize raw text (or a URL slug) into a topic phrase
pub fn cmd_clean(text: &str, url: bool, json: bool) -> Result<()> {
    let raw = if url { topic_from_url(text) } else { text.to_string() };
    let topic = clean_topic(&raw);

    if json {
        let output = serde_json::json!({
            "input": text,
            "topic": topic,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if topic.is_empty() {
        eprintln!("{}", "Nothing left after cleaning.".yellow());
    } else {
        println!("{}", topic);
    }
    Ok(())
}

/// Classify a page from explicit fields, or from a fetched URL
pub fn cmd_classify(
    url: String,
    title: String,
    h1: String,
    meta_description: String,
    fetch_url: Option<String>,
    json: bool,
) -> Result<()> {
    let signals = match fetch_url {
        Some(target) => fetch::fetch_page(&target)?.signals(),
        None => PageSignals {
            url,
            title,
            h1,
            meta_description,
        },
    };

    if signals.is_empty() {
        return Err(SeoError::InvalidInput(
            "provide at least one of --url, --title, --h1, --meta-description or --fetch".into(),
        ));
    }

    let result = classify_page(&signals);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_classification(&signals, &result);
    Ok(())
}

fn print_classification(signals: &PageSignals, result: &PageClassification) {
    println!();
    if !signals.url.is_empty() {
        println!("  URL:        {}", signals.url);
    }
    if !signals.title.is_empty() {
        println!("  Title:      {}", signals.title);
    }
    if !signals.h1.is_empty() {
        println!("  H1:         {}", signals.h1);
    }
    println!();
    println!(
        "  Page type:  {} ({:.0}% confidence)",
        result.page_type.as_str().bold().green(),
        result.confidence * 100.0
    );
    if result.signals.is_empty() {
        println!("  Signals:    {}", "none (defaulted to blog)".dimmed());
    } else {
        println!("  Signals:");
        for signal in &result.signals {
            println!("    - {}", signal);
        }
    }
    println!();
}

/// Generate a content brief
pub fn cmd_brief(
    input: String,
    url: bool,
    intent: Option<String>,
    audience: Option<String>,
    tone: Option<String>,
    format: BriefFormat,
) -> Result<()> {
    let config = Config::load()?;

    let request = BriefRequest {
        input_type: if url { "url" } else { "keyword" }.to_string(),
        input_value: input,
        search_intent: intent.unwrap_or_default(),
        audience: audience.unwrap_or_default(),
        tone: tone.unwrap_or_default(),
    };
    let brief = build_brief(&request, &config.brief_defaults());

    match format {
        BriefFormat::Json => println!("{}", serde_json::to_string_pretty(&brief)?),
        BriefFormat::Markdown => print!("{}", brief.to_markdown()),
        BriefFormat::Text => print_brief(&brief),
    }
    Ok(())
}

fn print_brief(brief: &ContentBrief) {
    println!("\n{} {}\n", "Content brief:".bold(), brief.topic.bold().cyan());
    println!("  Page type:   {}", brief.page_type.as_str().green());
    println!("  Intent:      {}", brief.search_intent);
    println!("  Audience:    {}", brief.target_audience);
    println!("  Tone:        {}", brief.tone_of_voice);
    println!("  Length:      ~{} words", brief.recommended_word_count);

    print_section("Primary keywords", &brief.primary_keywords);
    print_section("Secondary keywords", &brief.secondary_keywords);

    println!("\n  {}", "Outline".bold());
    for (i, heading) in brief.outline.iter().enumerate() {
        println!("    {}. {}", i + 1, heading);
    }

    print_section("Questions", &brief.questions);
    print_section("Internal links", &brief.internal_link_ideas);
    print_section("Competitors", &brief.competitor_examples);

    println!("\n  {}", "Checklist".bold());
    for item in &brief.checklist_items {
        println!("    {} {}", "□".dimmed(), item);
    }
    println!();
}

fn print_section(title: &str, items: &[String]) {
    println!("\n  {}", title.bold());
    for item in items {
        println!("    - {}", item);
    }
}
