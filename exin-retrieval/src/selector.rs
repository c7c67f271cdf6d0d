//! Staged template selection with a fixed fallback chain.
//!
//! Stages: blended → embedding-only (looser absolute-cosine floor) →
//! keyword-only → first active item → caller-provided default. Each stage
//! runs only when the previous one returned nothing. No-match is a
//! distinct outcome (`None` inside a stage), never a 0.0-similarity match;
//! the rescue stages carry `similarity: None` instead of a fabricated
//! score.

use exin_core::config::RetrievalConfig;
use exin_core::errors::{ExinResult, RetrievalError};
use exin_core::models::{InstructionTemplate, Similarity};
use exin_embeddings::cache::{compound_key, MemoCache};
use exin_embeddings::similarity::cosine_similarity;
use tracing::debug;

use crate::scorer::{self, ScoreSignal};

/// Which fallback stage produced the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStage {
    Blended,
    EmbeddingOnly,
    KeywordOnly,
    FirstActive,
    Default,
}

/// A selected template with its provenance.
#[derive(Debug, Clone)]
pub struct SelectedTemplate {
    pub template: InstructionTemplate,
    /// Real score when a scoring stage matched; `None` for the rescue
    /// stages, which select without scoring.
    pub similarity: Option<Similarity>,
    pub stage: SelectionStage,
}

/// Template selector with memoized results.
pub struct TemplateSelector {
    config: RetrievalConfig,
    /// Optional hardcoded last-resort template owned by the caller.
    default_template: Option<InstructionTemplate>,
    memo: MemoCache<SelectedTemplate>,
}

impl TemplateSelector {
    pub fn new(config: RetrievalConfig, default_template: Option<InstructionTemplate>) -> Self {
        let memo = MemoCache::new(config.selection_cache_size);
        Self {
            config,
            default_template,
            memo,
        }
    }

    /// Run the fallback chain over `candidates` (pre-filtered to active).
    ///
    /// Errors only when every stage, including the default, is exhausted.
    pub fn select(
        &self,
        query_embedding: Option<&[f32]>,
        query_text: Option<&str>,
        candidates: &[InstructionTemplate],
    ) -> ExinResult<SelectedTemplate> {
        let memo_key = self.memo_key(query_embedding, query_text);
        if let Some(hit) = self.memo.get(&memo_key) {
            debug!("selection memo hit");
            return Ok(hit);
        }

        let selected = self
            .select_blended(query_embedding, query_text, candidates)
            .or_else(|| self.select_embedding_only(query_embedding, candidates))
            .or_else(|| self.select_keyword_only(query_text, candidates))
            .or_else(|| Self::select_first_active(candidates))
            .or_else(|| self.select_default());

        match selected {
            Some(selection) => {
                debug!(
                    template_id = selection.template.id,
                    stage = ?selection.stage,
                    similarity = selection.similarity.map(Similarity::value),
                    "template selected"
                );
                self.memo.insert(memo_key, selection.clone());
                Ok(selection)
            }
            None if candidates.is_empty() => Err(RetrievalError::EmptyCorpus.into()),
            None => Err(RetrievalError::FallbacksExhausted.into()),
        }
    }

    /// Stage 1: blended scoring. Requires a query embedding and at least
    /// one candidate with a usable embedding; the best score must clear
    /// the blended floor unless it came from the keyword signal alone.
    fn select_blended(
        &self,
        query_embedding: Option<&[f32]>,
        query_text: Option<&str>,
        candidates: &[InstructionTemplate],
    ) -> Option<SelectedTemplate> {
        let query_embedding = query_embedding?;
        let scored =
            scorer::score_candidates(Some(query_embedding), query_text, candidates, &self.config);

        // If nothing in the corpus has a usable embedding the stage yields
        // to the lexical fallbacks.
        if !scored
            .iter()
            .any(|s| s.signal != ScoreSignal::KeywordOnly)
        {
            return None;
        }

        let best = scored.first()?;
        let passes = match best.signal {
            ScoreSignal::KeywordOnly => best.score > 0.0,
            _ => best.score >= self.config.blended_floor,
        };
        if !passes {
            debug!(score = best.score, "best blended score below floor");
            return None;
        }
        Some(SelectedTemplate {
            template: best.template.clone(),
            similarity: Some(Similarity::new(best.score)),
            stage: SelectionStage::Blended,
        })
    }

    /// Stage 2: embedding-only with the looser absolute-cosine floor.
    fn select_embedding_only(
        &self,
        query_embedding: Option<&[f32]>,
        candidates: &[InstructionTemplate],
    ) -> Option<SelectedTemplate> {
        let query_embedding = query_embedding?;
        let best = candidates
            .iter()
            .filter_map(|item| {
                let vec = item.embedding.as_deref()?;
                let cos = cosine_similarity(query_embedding, vec);
                Some((item, cos))
            })
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))?;

        if best.1 < self.config.embedding_only_floor {
            return None;
        }
        Some(SelectedTemplate {
            template: best.0.clone(),
            similarity: Some(Similarity::new(best.1)),
            stage: SelectionStage::EmbeddingOnly,
        })
    }

    /// Stage 3: keyword-only, discounted.
    fn select_keyword_only(
        &self,
        query_text: Option<&str>,
        candidates: &[InstructionTemplate],
    ) -> Option<SelectedTemplate> {
        let query_text = query_text?;
        let best = candidates
            .iter()
            .filter(|item| !item.keywords.is_empty())
            .map(|item| {
                let score = scorer::keyword_score(query_text, &item.keywords, self.config.keyword_cap)
                    * self.config.keyword_only_discount;
                (item, score)
            })
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))?;

        if best.1 <= 0.0 {
            return None;
        }
        Some(SelectedTemplate {
            template: best.0.clone(),
            similarity: Some(Similarity::new(best.1)),
            stage: SelectionStage::KeywordOnly,
        })
    }

    /// Stage 4: first active item, unscored.
    fn select_first_active(candidates: &[InstructionTemplate]) -> Option<SelectedTemplate> {
        candidates.first().map(|item| SelectedTemplate {
            template: item.clone(),
            similarity: None,
            stage: SelectionStage::FirstActive,
        })
    }

    /// Stage 5: caller-provided hardcoded default, unscored.
    fn select_default(&self) -> Option<SelectedTemplate> {
        self.default_template.as_ref().map(|t| SelectedTemplate {
            template: t.clone(),
            similarity: None,
            stage: SelectionStage::Default,
        })
    }

    fn memo_key(&self, query_embedding: Option<&[f32]>, query_text: Option<&str>) -> String {
        let embedding_bytes: Vec<u8> = query_embedding
            .unwrap_or(&[])
            .iter()
            .flat_map(|f| f.to_le_bytes())
            .collect();
        compound_key(&[&embedding_bytes, query_text.unwrap_or("").as_bytes()])
    }
}
