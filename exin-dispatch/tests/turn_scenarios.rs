//! Full-turn orchestration scenarios with stub collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use exin_core::config::ExinConfig;
use exin_core::errors::ExinResult;
use exin_core::models::{
    Commodity, ConversationTurn, CurrencyRate, InstructionTemplate, RegulatoryChunk,
};
use exin_core::traits::{
    IEmbeddingProvider, IIntentClassifier, IMarketStore, IRegulatoryCorpus, ITemplateCorpus,
};
use exin_core::Intent;
use exin_dispatch::{Dispatcher, SlotFacts, TurnOutcome};
use exin_retrieval::SelectionStage;

// ── Stub collaborators ─────────────────────────────────────────────────────

struct ConstantEmbedder;

#[async_trait]
impl IEmbeddingProvider for ConstantEmbedder {
    async fn embed(&self, _text: &str) -> ExinResult<Vec<f32>> {
        Ok(vec![1.0, 0.0, 0.0, 0.0])
    }

    fn dimensions(&self) -> usize {
        4
    }

    fn name(&self) -> &str {
        "constant-stub"
    }
}

struct StubClassifier {
    reply: &'static str,
    calls: AtomicUsize,
}

impl StubClassifier {
    fn replying(reply: &'static str) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl IIntentClassifier for StubClassifier {
    async fn classify(&self, _query: &str, _context: &str) -> ExinResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.to_string())
    }
}

struct StubTemplates {
    usage_bumps: AtomicUsize,
}

impl StubTemplates {
    fn new() -> Self {
        Self {
            usage_bumps: AtomicUsize::new(0),
        }
    }
}

impl ITemplateCorpus for StubTemplates {
    fn active_templates(&self) -> ExinResult<Vec<InstructionTemplate>> {
        Ok(vec![InstructionTemplate {
            id: 1,
            template_text: "Jawab pertanyaan ekspor dengan ringkas.".to_string(),
            keywords: vec!["ekspor".to_string()],
            embedding: Some(vec![1.0, 0.0, 0.0, 0.0]),
            is_active: true,
            usage_count: 0,
        }])
    }

    fn record_usage(&self, _template_id: i64) -> ExinResult<()> {
        self.usage_bumps.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct EmptyTemplates;

impl ITemplateCorpus for EmptyTemplates {
    fn active_templates(&self) -> ExinResult<Vec<InstructionTemplate>> {
        Ok(Vec::new())
    }

    fn record_usage(&self, _template_id: i64) -> ExinResult<()> {
        Ok(())
    }
}

struct StubRegulations {
    chunks: Vec<RegulatoryChunk>,
}

impl IRegulatoryCorpus for StubRegulations {
    fn top_chunks(
        &self,
        _query_embedding: &[f32],
        _floor: f64,
        limit: usize,
    ) -> ExinResult<Vec<RegulatoryChunk>> {
        Ok(self.chunks.iter().take(limit).cloned().collect())
    }
}

struct StubMarket;

impl IMarketStore for StubMarket {
    fn find_commodity(&self, _name: &str) -> ExinResult<Option<Commodity>> {
        Ok(Some(Commodity {
            id: 1,
            name: "Kakao".to_string(),
            price: None,
            unit: None,
            hs_code: None,
        }))
    }

    fn latest_rate(&self, _base: &str, _target: &str) -> ExinResult<Option<CurrencyRate>> {
        Ok(Some(CurrencyRate {
            id: 1,
            base_currency: "USD".to_string(),
            target_currency: "IDR".to_string(),
            rate: 10_000.0,
            rate_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            created_at: Utc::now(),
        }))
    }
}

fn duty_chunks() -> Vec<RegulatoryChunk> {
    vec![
        RegulatoryChunk {
            id: 1,
            content: "Tarif bea keluar 5% untuk kakao.".to_string(),
            embedding: None,
            metadata: None,
        },
        RegulatoryChunk {
            id: 2,
            content: "Harga referensi ekspor USD 2,000/ton.".to_string(),
            embedding: None,
            metadata: None,
        },
    ]
}

fn turn(user: &str, assistant: &str) -> ConversationTurn {
    ConversationTurn::new(user, assistant)
}

// ── Scenarios ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn incomplete_duty_facts_end_the_turn_with_missing_fields() {
    let embedder = ConstantEmbedder;
    let classifier = StubClassifier::replying(r#"{"intent":"general_info","confidence":0.9}"#);
    let templates = StubTemplates::new();
    let regulations = StubRegulations {
        chunks: duty_chunks(),
    };
    let market = StubMarket;
    let dispatcher = Dispatcher::new(
        ExinConfig::default(),
        &embedder,
        &classifier,
        &templates,
        &regulations,
        &market,
        None,
    );

    let outcome = dispatcher
        .process("hitung bea keluar kakao 500 kg", &[])
        .await
        .unwrap();

    match outcome {
        TurnOutcome::MissingData {
            intent,
            missing_fields,
            collected: SlotFacts::Duty(facts),
        } => {
            assert_eq!(intent, Intent::ExportDuty);
            assert_eq!(missing_fields, vec!["negara_tujuan".to_string()]);
            assert_eq!(facts.product_name.as_deref(), Some("Kakao"));
            assert_eq!(facts.net_weight_kg, Some(500.0));
        }
        other => panic!("expected missing-data outcome, got {other:?}"),
    }
    // Keyword rule fired, so the semantic collaborator stayed idle.
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn historical_destination_completes_the_duty_facts() {
    let embedder = ConstantEmbedder;
    let classifier = StubClassifier::replying(r#"{"intent":"general_info","confidence":0.9}"#);
    let templates = StubTemplates::new();
    let regulations = StubRegulations {
        chunks: duty_chunks(),
    };
    let market = StubMarket;
    let dispatcher = Dispatcher::new(
        ExinConfig::default(),
        &embedder,
        &classifier,
        &templates,
        &regulations,
        &market,
        None,
    );

    let history = [
        turn(
            "saya mau ekspor ke India",
            "Baik, tujuan India dicatat. Produk apa yang akan diekspor?",
        ),
        turn("komoditas unggulan apa saat ini?", "Kakao dan kopi."),
    ];
    let outcome = dispatcher
        .process("hitung bea keluar kakao 10000 kg", &history)
        .await
        .unwrap();

    match outcome {
        TurnOutcome::DutyComputed {
            facts,
            result,
            template,
        } => {
            assert_eq!(facts.destination_country.as_deref(), Some("India"));
            assert!(result.can_compute);
            assert_eq!(result.tariff_percent, Some(5.0));
            assert!((result.duty_idr - 10_000_000.0).abs() < 1e-6);
            assert_eq!(template.template.id, 1);
        }
        other => panic!("expected computed outcome, got {other:?}"),
    }
    assert_eq!(templates.usage_bumps.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unclassified_query_falls_back_to_semantic_general_info() {
    let embedder = ConstantEmbedder;
    let classifier = StubClassifier::replying(r#"{"intent":"general_info","confidence":0.9}"#);
    let templates = StubTemplates::new();
    let regulations = StubRegulations { chunks: Vec::new() };
    let market = StubMarket;
    let dispatcher = Dispatcher::new(
        ExinConfig::default(),
        &embedder,
        &classifier,
        &templates,
        &regulations,
        &market,
        None,
    );

    let outcome = dispatcher
        .process("bagaimana cara mulai ekspor?", &[])
        .await
        .unwrap();

    match outcome {
        TurnOutcome::GeneralDelegated {
            template, analysis, ..
        } => {
            assert_eq!(template.template.id, 1);
            assert_eq!(analysis.intent, Intent::GeneralInfo);
        }
        other => panic!("expected general delegation, got {other:?}"),
    }
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_corpus_falls_back_to_the_installed_default_template() {
    let embedder = ConstantEmbedder;
    let classifier = StubClassifier::replying(r#"{"intent":"general_info","confidence":0.9}"#);
    let templates = EmptyTemplates;
    let regulations = StubRegulations { chunks: Vec::new() };
    let market = StubMarket;
    let dispatcher = Dispatcher::new(
        ExinConfig::default(),
        &embedder,
        &classifier,
        &templates,
        &regulations,
        &market,
        None,
    )
    .with_default_template(InstructionTemplate {
        id: 0,
        template_text: "Jawab sebagai asisten ekspor.".to_string(),
        keywords: Vec::new(),
        embedding: None,
        is_active: true,
        usage_count: 0,
    });

    let outcome = dispatcher
        .process("bagaimana cara mulai ekspor?", &[])
        .await
        .unwrap();

    match outcome {
        TurnOutcome::GeneralDelegated { template, .. } => {
            assert_eq!(template.stage, SelectionStage::Default);
            assert_eq!(template.template.id, 0);
            assert!(template.similarity.is_none());
        }
        other => panic!("expected general delegation, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_classifier_reply_degrades_to_fallback_analysis() {
    let embedder = ConstantEmbedder;
    let classifier = StubClassifier::replying("not json at all");
    let templates = StubTemplates::new();
    let regulations = StubRegulations { chunks: Vec::new() };
    let market = StubMarket;
    let dispatcher = Dispatcher::new(
        ExinConfig::default(),
        &embedder,
        &classifier,
        &templates,
        &regulations,
        &market,
        None,
    );

    let outcome = dispatcher
        .process("bagaimana cara mulai ekspor?", &[])
        .await
        .unwrap();

    match outcome {
        TurnOutcome::GeneralDelegated { analysis, .. } => {
            assert_eq!(analysis.intent, Intent::GeneralInfo);
            assert!((analysis.confidence - 0.5).abs() < f64::EPSILON);
        }
        other => panic!("expected general delegation, got {other:?}"),
    }
}

#[tokio::test]
async fn template_request_is_delegated_without_collaborators() {
    let embedder = ConstantEmbedder;
    let classifier = StubClassifier::replying(r#"{"intent":"general_info","confidence":0.9}"#);
    let templates = StubTemplates::new();
    let regulations = StubRegulations { chunks: Vec::new() };
    let market = StubMarket;
    let dispatcher = Dispatcher::new(
        ExinConfig::default(),
        &embedder,
        &classifier,
        &templates,
        &regulations,
        &market,
        None,
    );

    let outcome = dispatcher
        .process("buatkan commercial invoice untuk ekspor ke india", &[])
        .await
        .unwrap();

    match outcome {
        TurnOutcome::DocumentDelegated { intent, facts } => {
            assert_eq!(intent, Intent::DocumentTemplate);
            assert_eq!(facts.document_name.as_deref(), Some("Commercial Invoice"));
            assert_eq!(facts.country.as_deref(), Some("India"));
        }
        other => panic!("expected document delegation, got {other:?}"),
    }
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn proposal_flow_collects_across_turns() {
    let embedder = ConstantEmbedder;
    let classifier = StubClassifier::replying(r#"{"intent":"export_proposal","confidence":0.8}"#);
    let templates = StubTemplates::new();
    let regulations = StubRegulations { chunks: Vec::new() };
    let market = StubMarket;
    let dispatcher = Dispatcher::new(
        ExinConfig::default(),
        &embedder,
        &classifier,
        &templates,
        &regulations,
        &market,
        None,
    );

    // Turn 1: the proposal keyword fires but nothing is known yet.
    let outcome = dispatcher.process("buat proposal ekspor", &[]).await.unwrap();
    match outcome {
        TurnOutcome::MissingData {
            intent,
            missing_fields,
            ..
        } => {
            assert_eq!(intent, Intent::ExportProposal);
            assert_eq!(missing_fields.len(), 5);
        }
        other => panic!("expected missing-data outcome, got {other:?}"),
    }

    // Turn 2: the user supplies everything; the semantic classifier keeps
    // the flow on export_proposal.
    let history = [turn(
        "buat proposal ekspor",
        "Mohon lengkapi data eksportir, pembeli, negara tujuan, email dan telepon.",
    )];
    let outcome = dispatcher
        .process(
            "Exporter: PT Makmur\nConsignee: Delhi Trading\nnegara tujuan India\nemail budi@makmur.co.id\nwa: +62 812 3456 7890",
            &history,
        )
        .await
        .unwrap();

    match outcome {
        TurnOutcome::ProposalReady { state, variables } => {
            assert!(state.is_complete());
            assert_eq!(state.collected.destination_country.as_deref(), Some("India"));
            assert_eq!(variables.len(), 12);
            assert_eq!(variables["generated_product_summary"], None);
            assert!(variables["contact_email"].is_some());
        }
        other => panic!("expected proposal-ready outcome, got {other:?}"),
    }
}
