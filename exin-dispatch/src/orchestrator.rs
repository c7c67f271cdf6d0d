//! One-turn orchestration: classify, fill slots, dispatch.

use std::collections::BTreeMap;

use exin_core::config::ExinConfig;
use exin_core::models::{
    ConversationTurn, DutyCalculationResult, ExtractedDutyFacts, InstructionTemplate,
    ProposalFacts, ProposalSlotState, QueryAnalysis,
};
use exin_core::traits::{
    IEmbeddingProvider, IIntentClassifier, IMarketStore, IRegulatoryCorpus, ITariffOracle,
    ITemplateCorpus,
};
use exin_core::{ExinResult, Intent};
use exin_embeddings::EmbeddingService;
use exin_retrieval::{ContextSelector, SelectedTemplate, TemplateSelector};
use exin_tariff::DutyEngine;
use tracing::{debug, info, warn};

use crate::classify::KeywordClassifier;
use crate::document::{extract_document_facts, DocumentFacts};
use crate::facts::extract_duty_facts;
use crate::proposal::extract_proposal_facts;

/// Collected slot-filling facts carried in a missing-data outcome, so the
/// caller can show what is already known.
#[derive(Debug, Clone)]
pub enum SlotFacts {
    Duty(ExtractedDutyFacts),
    Proposal(ProposalFacts),
}

/// The single terminal outcome of one turn.
#[derive(Debug)]
pub enum TurnOutcome {
    /// Slot filling stopped: ask the user for exactly these fields.
    MissingData {
        intent: Intent,
        missing_fields: Vec<String>,
        collected: SlotFacts,
    },
    /// The duty calculation ran to completion.
    DutyComputed {
        facts: ExtractedDutyFacts,
        result: DutyCalculationResult,
        template: SelectedTemplate,
    },
    /// All proposal slots filled: completion signal plus the variable map
    /// for downstream rendering.
    ProposalReady {
        state: ProposalSlotState,
        variables: BTreeMap<String, Option<String>>,
    },
    /// Document-lookup intents, handed to the out-of-scope collaborator
    /// with the facts it needs.
    DocumentDelegated {
        intent: Intent,
        facts: DocumentFacts,
    },
    /// Free-form generation, with the best-matched template and pruned
    /// context the generator should use.
    GeneralDelegated {
        template: SelectedTemplate,
        analysis: QueryAnalysis,
        context_snippets: Vec<String>,
    },
}

/// Per-request orchestrator. Single-threaded over one turn; the only
/// concurrency is joining independent sub-steps.
pub struct Dispatcher<'a> {
    config: ExinConfig,
    classifier: KeywordClassifier,
    embeddings: EmbeddingService<'a>,
    context: ContextSelector,
    selector: TemplateSelector,
    semantic: &'a dyn IIntentClassifier,
    templates: &'a dyn ITemplateCorpus,
    regulations: &'a dyn IRegulatoryCorpus,
    engine: DutyEngine<'a>,
    oracle: Option<&'a dyn ITariffOracle>,
}

impl<'a> Dispatcher<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: ExinConfig,
        embedding_provider: &'a dyn IEmbeddingProvider,
        semantic: &'a dyn IIntentClassifier,
        templates: &'a dyn ITemplateCorpus,
        regulations: &'a dyn IRegulatoryCorpus,
        market: &'a dyn IMarketStore,
        oracle: Option<&'a dyn ITariffOracle>,
    ) -> Self {
        let embeddings =
            EmbeddingService::new(embedding_provider, config.dispatch.embedding_cache_size);
        let context = ContextSelector::new(config.context.clone());
        let selector = TemplateSelector::new(config.retrieval.clone(), None);
        let engine = DutyEngine::new(market, config.extraction.clone());
        Self {
            config,
            classifier: KeywordClassifier::new(),
            embeddings,
            context,
            selector,
            semantic,
            templates,
            regulations,
            engine,
            oracle,
        }
    }

    /// Install a last-resort template used when the corpus yields no
    /// candidate at all, so general-info turns never fail on an empty
    /// corpus.
    pub fn with_default_template(mut self, template: InstructionTemplate) -> Self {
        self.selector = TemplateSelector::new(self.config.retrieval.clone(), Some(template));
        self
    }

    /// Process one user turn against the bounded conversation history.
    /// Always ends in exactly one [`TurnOutcome`]; errors surface only
    /// when every fallback within a step is exhausted.
    pub async fn process(
        &self,
        query: &str,
        history: &[ConversationTurn],
    ) -> ExinResult<TurnOutcome> {
        let quick = self.classifier.quick_intent(query);
        debug!(?quick, "keyword classification");

        // Document intents need no embedding or collaborator at all.
        if let Some(intent @ (Intent::DocumentList | Intent::DocumentTemplate)) = quick {
            let facts = extract_document_facts(query);
            info!(%intent, ?facts, "delegating document lookup");
            return Ok(TurnOutcome::DocumentDelegated { intent, facts });
        }
        if quick == Some(Intent::ExportProposal) {
            return Ok(self.proposal_turn(query, history));
        }

        let context_snippets = self.context.select(query, history, &self.embeddings).await;

        // Keyword-detected duty queries skip semantic classification; for
        // everything else the collaborator decides, concurrently with
        // embedding creation.
        let (analysis, query_embedding) = match quick {
            Some(Intent::ExportDuty) => (None, self.embeddings.embed(query).await),
            _ => {
                let context_text = context_snippets.join("\n");
                let (raw, embedding) = tokio::join!(
                    self.semantic.classify(query, &context_text),
                    self.embeddings.embed(query),
                );
                let analysis = match raw {
                    Ok(raw) => QueryAnalysis::parse_or_fallback(&raw),
                    Err(err) => {
                        warn!(error = %err, "semantic classification failed");
                        QueryAnalysis::fallback()
                    }
                };
                (Some(analysis), embedding)
            }
        };

        let intent = analysis
            .as_ref()
            .map(|a| a.intent)
            .unwrap_or(Intent::ExportDuty);
        debug!(%intent, "intent resolved");

        match intent {
            Intent::DocumentList | Intent::DocumentTemplate => {
                let facts = extract_document_facts(query);
                Ok(TurnOutcome::DocumentDelegated { intent, facts })
            }
            Intent::ExportProposal => Ok(self.proposal_turn(query, history)),
            Intent::ExportDuty => {
                self.duty_turn(query, history, query_embedding.as_deref(), &context_snippets)
                    .await
            }
            Intent::GeneralInfo => {
                let template = self.select_template(query, query_embedding.as_deref())?;
                let analysis = analysis.unwrap_or_else(QueryAnalysis::fallback);
                Ok(TurnOutcome::GeneralDelegated {
                    template,
                    analysis,
                    context_snippets,
                })
            }
        }
    }

    /// The export-duty slot-filling flow: template selection and fact
    /// extraction are independent and joined before the outcome is built.
    async fn duty_turn(
        &self,
        query: &str,
        history: &[ConversationTurn],
        query_embedding: Option<&[f32]>,
        context_snippets: &[String],
    ) -> ExinResult<TurnOutcome> {
        let extraction_input = if context_snippets.is_empty() {
            query.to_string()
        } else {
            let mut parts = vec![query.to_string()];
            parts.extend(context_snippets.iter().cloned());
            parts.join("\n")
        };

        let (template, mut facts) = tokio::join!(
            async { self.select_template(query, query_embedding) },
            async { extract_duty_facts(&extraction_input) },
        );
        let template = template?;

        // History re-scan only fills fields the current message left
        // empty; current-message facts always win.
        if !facts.is_complete() {
            facts.merge_from(&extract_duty_facts(&self.history_text(history, query)));
        }

        if !facts.is_complete() {
            let missing_fields: Vec<String> = facts
                .missing_fields()
                .into_iter()
                .map(str::to_owned)
                .collect();
            info!(?missing_fields, "duty facts incomplete, prompting");
            return Ok(TurnOutcome::MissingData {
                intent: Intent::ExportDuty,
                missing_fields,
                collected: SlotFacts::Duty(facts),
            });
        }

        // All three fields are present past the is_complete() gate.
        let product = facts.product_name.clone().unwrap_or_default();
        let weight = facts.net_weight_kg.unwrap_or_default();
        let destination = facts.destination_country.clone().unwrap_or_default();

        let chunks = match query_embedding {
            Some(embedding) => self.regulations.top_chunks(
                embedding,
                self.config.extraction.chunk_similarity_floor,
                self.config.extraction.max_chunks,
            )?,
            // No embedding, no retrieval signal: the engine still runs and
            // reports what it could not find.
            None => Vec::new(),
        };

        let result = self
            .engine
            .calculate(&product, weight, &destination, &chunks, self.oracle)
            .await?;

        if let Err(err) = self.templates.record_usage(template.template.id) {
            warn!(error = %err, template_id = template.template.id, "usage bump failed");
        }

        Ok(TurnOutcome::DutyComputed {
            facts,
            result,
            template,
        })
    }

    /// The export-proposal slot-filling flow. Entirely local: regex
    /// extraction over the current message, then over the history window.
    fn proposal_turn(&self, query: &str, history: &[ConversationTurn]) -> TurnOutcome {
        let mut facts = extract_proposal_facts(query);
        facts.merge_from(&extract_proposal_facts(&self.history_text(history, query)));

        let state = ProposalSlotState::from_facts(facts);
        if state.is_complete() {
            let variables = state.collected.variable_map();
            info!("proposal slots complete");
            TurnOutcome::ProposalReady { state, variables }
        } else {
            info!(missing = ?state.missing, "proposal facts incomplete, prompting");
            TurnOutcome::MissingData {
                intent: Intent::ExportProposal,
                missing_fields: state.missing.clone(),
                collected: SlotFacts::Proposal(state.collected),
            }
        }
    }

    fn select_template(
        &self,
        query: &str,
        query_embedding: Option<&[f32]>,
    ) -> ExinResult<SelectedTemplate> {
        let candidates = self.templates.active_templates()?;
        self.selector
            .select(query_embedding, Some(query), &candidates)
    }

    /// Concatenated text of the recent history window plus the current
    /// query, capped for re-extraction.
    fn history_text(&self, history: &[ConversationTurn], query: &str) -> String {
        let window = exin_core::models::recent_window(history, self.config.dispatch.history_window);
        let mut parts: Vec<&str> = Vec::with_capacity(window.len() * 2 + 1);
        for turn in window {
            parts.push(&turn.user_query);
            parts.push(&turn.assistant_response);
        }
        parts.push(query);
        let joined = parts.join("\n");
        joined
            .chars()
            .take(self.config.dispatch.merged_history_chars)
            .collect()
    }
}
