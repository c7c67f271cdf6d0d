//! The tariff-rule strategy cascade.
//!
//! An ordered list of pure strategies, each `(patterns, chunks, context) ->
//! Option<TariffRule>`, tried in fixed priority order: tier rule, anchored
//! percent, bare percent, specific levy. Delegated single-number extraction
//! runs last and only when chunks exist, so the cascade stays fully
//! deterministic without a collaborator.

use exin_core::config::ExtractionConfig;
use exin_core::constants::KG_PER_TON;
use exin_core::models::{Currency, RegulatoryChunk, TariffRule};
use exin_core::traits::ITariffOracle;
use regex::Regex;
use tracing::{debug, warn};

use crate::numeric::{parse_amount, parse_percent};
use crate::patterns::{self, Patterns};

/// Inputs the strategies may consult beyond the chunk text itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractionContext {
    /// Resolved unit price in USD per ton. Tier rules are only selectable
    /// when this is present and strictly exceeds the stated threshold.
    pub unit_price_usd_per_ton: Option<f64>,
}

/// Which strategy produced the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSource {
    TierPattern,
    AnchoredPercent,
    BarePercent,
    LevyPattern,
    Delegated,
    NoneFound,
}

/// One extraction outcome: the rule plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedRule {
    pub rule: TariffRule,
    pub source: RuleSource,
}

type Strategy = fn(&Patterns, &[RegulatoryChunk], &ExtractionContext) -> Option<TariffRule>;

const CASCADE: [(Strategy, RuleSource); 4] = [
    (tiered, RuleSource::TierPattern),
    (anchored_percent, RuleSource::AnchoredPercent),
    (bare_percent, RuleSource::BarePercent),
    (specific_levy, RuleSource::LevyPattern),
];

/// Runs the cascade over retrieved chunks, most relevant first.
pub struct RuleExtractor {
    patterns: Patterns,
    config: ExtractionConfig,
}

impl RuleExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            patterns: Patterns::compile(&config),
            config,
        }
    }

    /// Run the synchronous strategies. Pure and idempotent: the same chunk
    /// list and context always yield the same rule.
    pub fn extract(&self, chunks: &[RegulatoryChunk], ctx: &ExtractionContext) -> ExtractedRule {
        for (strategy, source) in CASCADE {
            if let Some(rule) = strategy(&self.patterns, chunks, ctx) {
                debug!(?source, ?rule, "tariff rule extracted");
                return ExtractedRule { rule, source };
            }
        }
        ExtractedRule {
            rule: TariffRule::Unknown,
            source: RuleSource::NoneFound,
        }
    }

    /// Full cascade including the delegated last resort. The oracle is
    /// consulted only when the regex strategies found nothing and chunks
    /// exist; its reply is accepted only as a well-formed leading number.
    pub async fn extract_with_oracle(
        &self,
        chunks: &[RegulatoryChunk],
        ctx: &ExtractionContext,
        oracle: Option<&dyn ITariffOracle>,
        product: &str,
        country: Option<&str>,
    ) -> ExtractedRule {
        let found = self.extract(chunks, ctx);
        if !found.rule.is_unknown() || chunks.is_empty() {
            return found;
        }
        let Some(oracle) = oracle else { return found };

        let reference = self.oracle_reference(chunks);
        match oracle.extract_percent(&reference, product, country).await {
            Ok(reply) => match parse_oracle_reply(&reply) {
                Some(percent) => {
                    debug!(percent, "tariff percent from delegated extraction");
                    ExtractedRule {
                        rule: TariffRule::FlatPercent { percent },
                        source: RuleSource::Delegated,
                    }
                }
                None => found,
            },
            Err(err) => {
                warn!(error = %err, "delegated tariff extraction failed");
                found
            }
        }
    }

    fn oracle_reference(&self, chunks: &[RegulatoryChunk]) -> String {
        chunks
            .iter()
            .take(self.config.oracle_max_chunks)
            .map(|c| truncate_chars(&c.content, self.config.oracle_chunk_chars))
            .collect::<Vec<_>>()
            .join("\n\n---\n\n")
    }
}

fn parse_oracle_reply(reply: &str) -> Option<f64> {
    let reply = reply.trim();
    if reply.to_uppercase().starts_with("NA") {
        return None;
    }
    let re = patterns::RE_LEADING_NUMBER.as_ref()?;
    let caps = re.captures(reply)?;
    parse_percent(caps.get(1)?.as_str())
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ── Strategies ─────────────────────────────────────────────────────────────

/// Tier rule: "(>|≥|di atas) USD <threshold>/ton ... <percent>%", selected
/// only when the supplied unit price strictly exceeds the threshold.
fn tiered(
    patterns: &Patterns,
    chunks: &[RegulatoryChunk],
    ctx: &ExtractionContext,
) -> Option<TariffRule> {
    let unit_price = ctx.unit_price_usd_per_ton?;
    let re = patterns.tier.as_ref()?;
    for chunk in chunks {
        for caps in re.captures_iter(&chunk.content) {
            let Some(threshold) = caps.get(1).and_then(|g| parse_amount(g.as_str())) else {
                continue;
            };
            let Some(percent) = caps.get(2).and_then(|g| parse_percent(g.as_str())) else {
                continue;
            };
            if unit_price > threshold {
                return Some(TariffRule::TieredPercent {
                    threshold_usd_per_ton: threshold,
                    percent,
                });
            }
        }
    }
    None
}

/// Flat percent close to an anchor term, preferred over any bare percent.
fn anchored_percent(
    patterns: &Patterns,
    chunks: &[RegulatoryChunk],
    _ctx: &ExtractionContext,
) -> Option<TariffRule> {
    first_percent(patterns.anchored_percent.as_ref(), chunks)
}

/// Any percentage anywhere in the text, the weakest percent signal.
fn bare_percent(
    _patterns: &Patterns,
    chunks: &[RegulatoryChunk],
    _ctx: &ExtractionContext,
) -> Option<TariffRule> {
    first_percent(patterns::RE_PERCENT_ANY.as_ref(), chunks)
}

fn first_percent(re: Option<&Regex>, chunks: &[RegulatoryChunk]) -> Option<TariffRule> {
    let re = re?;
    for chunk in chunks {
        for caps in re.captures_iter(&chunk.content) {
            if let Some(percent) = caps.get(1).and_then(|g| parse_percent(g.as_str())) {
                return Some(TariffRule::FlatPercent { percent });
            }
        }
    }
    None
}

/// Fixed amount per weight unit near an anchor term. Per-ton figures are
/// normalized to per-kg; USD and IDR stay distinct, conversion happens in
/// the engine.
fn specific_levy(
    patterns: &Patterns,
    chunks: &[RegulatoryChunk],
    _ctx: &ExtractionContext,
) -> Option<TariffRule> {
    let levy_patterns: [(Option<&Regex>, Currency, f64); 4] = [
        (patterns.levy_usd_kg.as_ref(), Currency::Usd, 1.0),
        (patterns.levy_usd_ton.as_ref(), Currency::Usd, KG_PER_TON),
        (patterns.levy_idr_kg.as_ref(), Currency::Idr, 1.0),
        (patterns.levy_idr_ton.as_ref(), Currency::Idr, KG_PER_TON),
    ];
    for chunk in chunks {
        for (pattern, currency, divisor) in &levy_patterns {
            let Some(re) = pattern else { continue };
            for caps in re.captures_iter(&chunk.content) {
                if let Some(amount) = caps.get(1).and_then(|g| parse_amount(g.as_str())) {
                    return Some(TariffRule::SpecificLevy {
                        amount_per_kg: amount / divisor,
                        currency: *currency,
                    });
                }
            }
        }
    }
    None
}
