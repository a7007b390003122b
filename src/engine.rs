//! DecisionEngine - lifecycle, decision pipeline, and learning loop.
//!
//! The engine is an explicit object constructed with injected `Storage`,
//! `Clock`, and `MetricsProvider` collaborators. Lifecycle is explicit:
//! `Uninitialized -> Ready -> Destroyed`. Decisions are read-only over a
//! snapshot of the shared state except for the history append; learning
//! mutations are serialized behind writer locks so concurrent `learn()`
//! calls never lose updates.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::domain::context::{analyze, RawContext};
use crate::domain::decision::{estimate_confidence, explain, Decision, DecisionHistory};
use crate::domain::foundation::{EngineError, OptionId, Role, Timestamp, UserId, ValidationError};
use crate::domain::patterns::{
    Interaction, LearningKey, LearningRecord, Outcome, PatternKey, UserPattern, UserPatternStore,
};
use crate::domain::scoring;
use crate::ports::{Clock, MetricsProvider, PerformanceMetrics, Storage, StorageError};

/// Storage key the persisted snapshot lives under.
const STATE_KEY: &str = "engine/state";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Uninitialized,
    Ready,
    Destroyed,
}

/// Health of the engine as reported by [`DecisionEngine::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineHealth {
    Uninitialized,
    Ready,
    Destroyed,
}

/// Snapshot of engine health and host-provided performance metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub health: EngineHealth,
    /// `None` when the host's `MetricsProvider` cannot supply metrics.
    pub performance: Option<PerformanceMetrics>,
    /// Last time a decision or learning update touched engine state.
    pub last_update: Option<Timestamp>,
}

/// Wire format of the persisted snapshot.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedState {
    patterns: Vec<(PatternKey, UserPattern)>,
    learning: Vec<(LearningKey, LearningRecord)>,
}

/// The adaptive decision-and-learning engine.
pub struct DecisionEngine {
    lifecycle: RwLock<Lifecycle>,
    patterns: RwLock<UserPatternStore>,
    learning: RwLock<HashMap<LearningKey, LearningRecord>>,
    history: RwLock<DecisionHistory>,
    last_update: RwLock<Option<Timestamp>>,
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    metrics: Arc<dyn MetricsProvider>,
    config: EngineConfig,
}

impl DecisionEngine {
    /// Constructs an engine in the `Uninitialized` state.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] when the configuration is invalid,
    /// e.g. zero capacities or an inverted business-hours window.
    pub fn new(
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        metrics: Arc<dyn MetricsProvider>,
        config: EngineConfig,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            lifecycle: RwLock::new(Lifecycle::Uninitialized),
            patterns: RwLock::new(UserPatternStore::new()),
            learning: RwLock::new(HashMap::new()),
            history: RwLock::new(DecisionHistory::new(config.history_capacity)),
            last_update: RwLock::new(None),
            storage,
            clock,
            metrics,
            config,
        })
    }

    /// Loads persisted state and transitions to `Ready`.
    ///
    /// Idempotent: calling again while `Ready` is a no-op returning `true`.
    /// A storage or decode failure is logged and the engine starts with
    /// empty in-memory state. Returns `false` only once destroyed.
    pub async fn initialize(&self) -> bool {
        {
            let lifecycle = self.lifecycle.read().await;
            match *lifecycle {
                Lifecycle::Ready => return true,
                Lifecycle::Destroyed => return false,
                Lifecycle::Uninitialized => {}
            }
        }

        if let Err(e) = self.load_state().await {
            warn!(error = %e, "failed to load persisted state, starting empty");
        }

        *self.lifecycle.write().await = Lifecycle::Ready;
        true
    }

    /// Flushes state and transitions to `Destroyed`.
    ///
    /// A save failure is logged and the in-memory state retained; the
    /// transition happens regardless. Returns whether the flush succeeded.
    pub async fn destroy(&self) -> bool {
        if *self.lifecycle.read().await == Lifecycle::Destroyed {
            return true;
        }

        let flushed = match self.save_state().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to flush state, in-memory state retained");
                false
            }
        };

        *self.lifecycle.write().await = Lifecycle::Destroyed;
        flushed
    }

    /// Selects the best option for the given context.
    ///
    /// # Errors
    /// - [`EngineError::NotInitialized`] outside the `Ready` window.
    /// - [`EngineError::EmptyCandidateList`] for zero candidates.
    pub async fn make_decision(
        &self,
        raw: RawContext,
        candidates: &[OptionId],
    ) -> Result<Decision, EngineError> {
        if *self.lifecycle.read().await != Lifecycle::Ready {
            return Err(EngineError::NotInitialized);
        }

        let started = Instant::now();
        let now = self.clock.now();
        let context = analyze(raw, now);

        let pattern = self
            .patterns
            .read()
            .await
            .get(&context.user_id, context.role);
        let selection = scoring::select(
            &context,
            &pattern,
            candidates,
            self.config.business_hours(),
        )?;

        let historical = self
            .history
            .read()
            .await
            .success_rate(&selection.winner.option);
        let confidence = estimate_confidence(context.complexity, historical);
        let reasoning = explain(&selection.winner.option, &context, &pattern);

        let decision = Decision::new(
            selection.winner,
            selection.alternatives,
            confidence,
            reasoning,
            context,
            started.elapsed().as_secs_f64() * 1000.0,
            now,
        );

        self.history.write().await.record(decision.clone());
        *self.last_update.write().await = Some(now);

        Ok(decision)
    }

    /// Records an interaction/outcome pair and refines the user's profile.
    ///
    /// Best-effort telemetry: never returns an error. Calls outside the
    /// `Ready` window and unattributable interactions (no element) are
    /// logged and dropped without touching any state.
    pub async fn learn(&self, interaction: Interaction, outcome: Outcome) {
        if *self.lifecycle.read().await != Lifecycle::Ready {
            debug!("learn() ignored outside the Ready window");
            return;
        }

        if let Err(reason) = self.apply_learning(interaction, outcome).await {
            debug!(reason, "learn() dropped an interaction");
        }
    }

    /// Reports engine health, host metrics, and the last state change.
    pub async fn status(&self) -> EngineStatus {
        let health = match *self.lifecycle.read().await {
            Lifecycle::Uninitialized => EngineHealth::Uninitialized,
            Lifecycle::Ready => EngineHealth::Ready,
            Lifecycle::Destroyed => EngineHealth::Destroyed,
        };

        EngineStatus {
            health,
            performance: self.metrics.sample(),
            last_update: *self.last_update.read().await,
        }
    }

    /// Read-side view of one behavioral profile (default for unseen keys).
    pub async fn user_pattern(&self, user_id: &UserId, role: Role) -> UserPattern {
        self.patterns.read().await.get(user_id, role)
    }

    /// Read-side view of one learning record, when it exists.
    pub async fn learning_record(&self, key: &LearningKey) -> Option<LearningRecord> {
        self.learning.read().await.get(key).cloned()
    }

    /// Number of decisions currently retained in history.
    pub async fn history_len(&self) -> usize {
        self.history.read().await.len()
    }

    async fn apply_learning(
        &self,
        interaction: Interaction,
        outcome: Outcome,
    ) -> Result<(), &'static str> {
        let element = interaction
            .element
            .clone()
            .ok_or("interaction carries no element")?;
        let key = LearningKey::derive(interaction.role, &interaction.kind, &element);

        {
            let mut learning = self.learning.write().await;
            learning.entry(key).or_default().record(
                interaction.clone(),
                outcome,
                self.config.learning_capacity,
            );
        }

        {
            let mut patterns = self.patterns.write().await;
            patterns.update(&interaction.user_id, interaction.role, &element);
            if let Some(duration) = interaction.session_duration_secs {
                patterns.record_session(&interaction.user_id, interaction.role, duration);
            }
            patterns.record_outcome(&interaction.user_id, interaction.role, outcome.success);
        }

        *self.last_update.write().await = Some(self.clock.now());
        Ok(())
    }

    async fn load_state(&self) -> Result<(), StorageError> {
        let Some(bytes) = self.storage.get(STATE_KEY).await? else {
            return Ok(());
        };
        let state: PersistedState = serde_json::from_slice(&bytes)
            .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;

        *self.patterns.write().await = UserPatternStore::from_entries(state.patterns);
        *self.learning.write().await = state.learning.into_iter().collect();
        debug!("loaded persisted engine state");
        Ok(())
    }

    async fn save_state(&self) -> Result<(), StorageError> {
        let state = PersistedState {
            patterns: self.patterns.read().await.entries(),
            learning: self
                .learning
                .read()
                .await
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        };
        let bytes = serde_json::to_vec(&state)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        self.storage.put(STATE_KEY, &bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemoryStorage, NullMetricsProvider};

    fn noon() -> Timestamp {
        // 2024-01-15T12:00:00Z
        Timestamp::from_unix_secs(1705320000)
    }

    fn engine() -> DecisionEngine {
        DecisionEngine::new(
            Arc::new(InMemoryStorage::new()),
            Arc::new(FixedClock::at(noon())),
            Arc::new(NullMetricsProvider::new()),
            EngineConfig::default(),
        )
        .unwrap()
    }

    fn option(name: &str) -> OptionId {
        OptionId::new(name).unwrap()
    }

    fn interaction(element: Option<&str>) -> Interaction {
        Interaction {
            user_id: UserId::new("u1").unwrap(),
            role: Role::Developer,
            kind: "click".to_string(),
            element: element.map(|e| OptionId::new(e).unwrap()),
            session_duration_secs: Some(300),
            occurred_at: noon(),
        }
    }

    #[tokio::test]
    async fn new_rejects_invalid_config() {
        let config = EngineConfig {
            business_hours_start: 18,
            business_hours_end: 9,
            ..EngineConfig::default()
        };
        let result = DecisionEngine::new(
            Arc::new(InMemoryStorage::new()),
            Arc::new(FixedClock::at(noon())),
            Arc::new(NullMetricsProvider::new()),
            config,
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn make_decision_requires_initialization() {
        let engine = engine();
        let result = engine
            .make_decision(RawContext::default(), &[option("chat")])
            .await;
        assert_eq!(result.unwrap_err(), EngineError::NotInitialized);
    }

    #[tokio::test]
    async fn initialize_is_idempotent() {
        let engine = engine();
        assert!(engine.initialize().await);
        assert!(engine.initialize().await);
        assert_eq!(engine.status().await.health, EngineHealth::Ready);
    }

    #[tokio::test]
    async fn initialize_after_destroy_is_refused() {
        let engine = engine();
        engine.initialize().await;
        engine.destroy().await;
        assert!(!engine.initialize().await);
        assert_eq!(engine.status().await.health, EngineHealth::Destroyed);
    }

    #[tokio::test]
    async fn make_decision_appends_to_history() {
        let engine = engine();
        engine.initialize().await;

        engine
            .make_decision(RawContext::default(), &[option("chat")])
            .await
            .unwrap();

        assert_eq!(engine.history_len().await, 1);
        assert!(engine.status().await.last_update.is_some());
    }

    #[tokio::test]
    async fn learn_ignored_before_initialization() {
        let engine = engine();

        engine
            .learn(
                interaction(Some("chat")),
                Outcome {
                    success: true,
                    duration_ms: None,
                },
            )
            .await;

        let key = LearningKey::derive(Role::Developer, "click", &option("chat"));
        assert!(engine.learning_record(&key).await.is_none());
    }

    #[tokio::test]
    async fn learn_updates_record_and_pattern() {
        let engine = engine();
        engine.initialize().await;

        engine
            .learn(
                interaction(Some("code_analysis")),
                Outcome {
                    success: true,
                    duration_ms: Some(15),
                },
            )
            .await;

        let key = LearningKey::derive(Role::Developer, "click", &option("code_analysis"));
        let record = engine.learning_record(&key).await.unwrap();
        assert_eq!(record.total_recorded, 1);

        let pattern = engine
            .user_pattern(&UserId::new("u1").unwrap(), Role::Developer)
            .await;
        assert!(pattern.prefers(&option("code_analysis")));
        assert!((pattern.average_session_secs - 300.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn learn_without_element_touches_nothing() {
        let engine = engine();
        engine.initialize().await;

        engine
            .learn(
                interaction(None),
                Outcome {
                    success: true,
                    duration_ms: None,
                },
            )
            .await;

        let pattern = engine
            .user_pattern(&UserId::new("u1").unwrap(), Role::Developer)
            .await;
        assert_eq!(pattern, UserPattern::default());
    }

    #[tokio::test]
    async fn destroy_then_make_decision_fails() {
        let engine = engine();
        engine.initialize().await;
        assert!(engine.destroy().await);

        let result = engine
            .make_decision(RawContext::default(), &[option("chat")])
            .await;
        assert_eq!(result.unwrap_err(), EngineError::NotInitialized);
    }

    #[tokio::test]
    async fn state_survives_destroy_and_reload() {
        let storage = Arc::new(InMemoryStorage::new());
        let clock = Arc::new(FixedClock::at(noon()));

        let first = DecisionEngine::new(
            storage.clone(),
            clock.clone(),
            Arc::new(NullMetricsProvider::new()),
            EngineConfig::default(),
        )
        .unwrap();
        first.initialize().await;
        first
            .learn(
                interaction(Some("code_analysis")),
                Outcome {
                    success: true,
                    duration_ms: None,
                },
            )
            .await;
        assert!(first.destroy().await);

        let second = DecisionEngine::new(
            storage,
            clock,
            Arc::new(NullMetricsProvider::new()),
            EngineConfig::default(),
        )
        .unwrap();
        second.initialize().await;

        let pattern = second
            .user_pattern(&UserId::new("u1").unwrap(), Role::Developer)
            .await;
        assert!(pattern.prefers(&option("code_analysis")));

        let key = LearningKey::derive(Role::Developer, "click", &option("code_analysis"));
        assert!(second.learning_record(&key).await.is_some());
    }

    #[tokio::test]
    async fn initialize_degrades_on_corrupt_snapshot() {
        let storage = Arc::new(InMemoryStorage::new());
        storage.put(STATE_KEY, b"not json").await.unwrap();

        let engine = DecisionEngine::new(
            storage,
            Arc::new(FixedClock::at(noon())),
            Arc::new(NullMetricsProvider::new()),
            EngineConfig::default(),
        )
        .unwrap();

        assert!(engine.initialize().await);
        assert_eq!(engine.status().await.health, EngineHealth::Ready);
    }

    #[tokio::test]
    async fn status_reports_null_metrics_as_none() {
        let engine = engine();
        engine.initialize().await;

        let status = engine.status().await;
        assert!(status.performance.is_none());
    }
}
