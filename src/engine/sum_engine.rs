// ============================================================================
// Summation Engine
// Core business logic for strategy selection and accumulation
// ============================================================================

use crate::domain::{RequestId, SelectedStrategy, Strategy, SumConfig, SumResult, SumValue};
use crate::interfaces::{EventHandler, NoOpEventHandler, SumEvent};
use crate::numeric::{parse_number, NumericInput, NumericResult, SumError};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

#[cfg(feature = "vectorized")]
use crate::numeric::to_f64;
#[cfg(feature = "vectorized")]
use crate::simd::{create_simd_reducer, SimdReducer};

/// Request-scoped summation engine with precise and vectorized strategies.
///
/// The engine is a pure function of its inputs apart from the events it
/// emits: it holds no mutable state, so one instance can serve concurrent
/// calls without coordination.
pub struct SumEngine {
    /// Explicit configuration, passed in at construction
    config: SumConfig,

    /// SIMD reducer for the vectorized fast path, when available
    #[cfg(feature = "vectorized")]
    reducer: Option<Arc<dyn SimdReducer>>,

    /// Event handler for diagnostic events
    event_handler: Arc<dyn EventHandler>,
}

impl SumEngine {
    /// Create a new engine with the given configuration and event handler.
    ///
    /// The best available SIMD reducer for the current CPU is selected at
    /// construction time.
    ///
    /// # Panics
    /// Panics if `config.validate()` fails.
    /// Use `SumConfig::validate()` to check before creating.
    pub fn new(config: SumConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        if let Err(reason) = config.validate() {
            panic!("invalid configuration: {}", reason);
        }

        Self {
            config,
            #[cfg(feature = "vectorized")]
            reducer: Some(create_simd_reducer()),
            event_handler,
        }
    }

    /// Create an engine with default configuration and no event output.
    pub fn with_defaults() -> Self {
        Self::new(SumConfig::new(), Arc::new(NoOpEventHandler))
    }

    /// Disable the vectorized fast path at runtime.
    ///
    /// Explicit `Vectorized` requests then fail with `StrategyUnavailable`
    /// and `Auto` runs the precise path unconditionally.
    #[cfg(feature = "vectorized")]
    pub fn without_vectorized(mut self) -> Self {
        self.reducer = None;
        self
    }

    /// Whether the vectorized strategy can run on this engine.
    pub fn vectorized_available(&self) -> bool {
        #[cfg(feature = "vectorized")]
        {
            self.reducer.is_some()
        }
        #[cfg(not(feature = "vectorized"))]
        {
            false
        }
    }

    /// The name of the active SIMD reducer, if any.
    pub fn reducer_name(&self) -> Option<&'static str> {
        #[cfg(feature = "vectorized")]
        {
            self.reducer.as_ref().map(|r| r.name())
        }
        #[cfg(not(feature = "vectorized"))]
        {
            None
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &SumConfig {
        &self.config
    }

    // ========================================================================
    // Summation
    // ========================================================================

    /// Sum a sequence of inputs with a freshly generated correlation id.
    ///
    /// # Errors
    /// - `InvalidNumber` on the first unparsable element (the whole call
    ///   fails; no partial sum is surfaced)
    /// - `StrategyUnavailable` when `Vectorized` is requested without SIMD
    ///   reduction support
    /// - `Overflow` when the precise total leaves the decimal range
    pub fn sum(&self, inputs: &[NumericInput], strategy: Strategy) -> NumericResult<SumResult> {
        self.sum_with_request(RequestId::new(), inputs, strategy)
    }

    /// Sum a sequence of inputs using the configured default strategy.
    pub fn sum_with_default(&self, inputs: &[NumericInput]) -> NumericResult<SumResult> {
        self.sum(inputs, self.config.default_strategy)
    }

    /// Sum a sequence of inputs under a caller-supplied correlation id.
    ///
    /// All emitted events carry `request_id` so boundary logs can be tied
    /// to this specific call.
    pub fn sum_with_request(
        &self,
        request_id: RequestId,
        inputs: &[NumericInput],
        strategy: Strategy,
    ) -> NumericResult<SumResult> {
        self.event_handler.on_event(SumEvent::RequestReceived {
            request_id: request_id.clone(),
            inputs: inputs.len(),
            timestamp: Utc::now(),
        });

        let result = self.dispatch(&request_id, inputs, strategy);

        match &result {
            Ok(outcome) => self.event_handler.on_event(SumEvent::Completed {
                request_id,
                strategy: outcome.strategy,
                count: outcome.count,
                timestamp: Utc::now(),
            }),
            Err(error) => self.event_handler.on_event(SumEvent::Failed {
                request_id,
                error: error.to_string(),
                timestamp: Utc::now(),
            }),
        }

        result
    }

    // ========================================================================
    // Strategy dispatch
    // ========================================================================

    fn dispatch(
        &self,
        request_id: &RequestId,
        inputs: &[NumericInput],
        strategy: Strategy,
    ) -> NumericResult<SumResult> {
        match strategy {
            Strategy::Precise => {
                self.select(request_id, SelectedStrategy::Precise);
                precise_sum(inputs)
            },
            Strategy::Vectorized => self.vectorized_sum(request_id, inputs),
            Strategy::Auto => self.auto_sum(request_id, inputs),
        }
    }

    fn select(&self, request_id: &RequestId, strategy: SelectedStrategy) {
        self.event_handler.on_event(SumEvent::StrategySelected {
            request_id: request_id.clone(),
            strategy,
            timestamp: Utc::now(),
        });
    }

    fn fall_back(&self, request_id: &RequestId, reason: String) {
        self.event_handler.on_event(SumEvent::FellBackToPrecise {
            request_id: request_id.clone(),
            reason,
            timestamp: Utc::now(),
        });
    }

    /// Explicitly requested vectorized path: unavailable capability is an
    /// error, never a silent fallback.
    fn vectorized_sum(
        &self,
        request_id: &RequestId,
        inputs: &[NumericInput],
    ) -> NumericResult<SumResult> {
        #[cfg(feature = "vectorized")]
        if let Some(reducer) = self.reducer.as_ref() {
            self.select(request_id, SelectedStrategy::Vectorized);
            let floats = convert_to_floats(inputs)?;
            return Ok(reduce_floats(reducer.as_ref(), &floats));
        }

        let _ = (request_id, inputs);
        Err(SumError::StrategyUnavailable)
    }

    /// Auto selection as an explicit two-step decision: first check
    /// capability and input length, then check float convertibility.
    /// The precise branch is taken deliberately; genuine data errors
    /// (tokens no strategy can parse) still surface from the precise path
    /// as `InvalidNumber`.
    fn auto_sum(&self, request_id: &RequestId, inputs: &[NumericInput]) -> NumericResult<SumResult> {
        #[cfg(feature = "vectorized")]
        if let Some(reducer) = self.reducer.as_ref() {
            if inputs.len() < self.config.vectorized_min_len {
                self.fall_back(
                    request_id,
                    format!(
                        "input length {} below vectorized threshold {}",
                        inputs.len(),
                        self.config.vectorized_min_len
                    ),
                );
            } else {
                match convert_to_floats(inputs) {
                    Ok(floats) => {
                        self.select(request_id, SelectedStrategy::Vectorized);
                        return Ok(reduce_floats(reducer.as_ref(), &floats));
                    },
                    Err(error) => {
                        self.fall_back(
                            request_id,
                            format!("input not float-convertible: {}", error),
                        );
                    },
                }
            }
            self.select(request_id, SelectedStrategy::Precise);
            return precise_sum(inputs);
        }

        self.fall_back(request_id, "SIMD reduction support not enabled".to_string());
        self.select(request_id, SelectedStrategy::Precise);
        precise_sum(inputs)
    }
}

impl Default for SumEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// Accumulation primitives
// ============================================================================

/// Precise decimal accumulation with running min/max.
///
/// Deterministic and order-independent: decimal addition is exact within
/// the 96-bit mantissa, so any permutation of the same inputs yields the
/// identical total. Fails atomically on the first invalid element.
pub(crate) fn precise_sum(inputs: &[NumericInput]) -> NumericResult<SumResult> {
    if inputs.is_empty() {
        return Ok(SumResult::empty_precise());
    }

    let mut total = Decimal::ZERO;
    let mut count = 0usize;
    let mut min: Option<Decimal> = None;
    let mut max: Option<Decimal> = None;

    for input in inputs {
        let value = parse_number(input)?;
        total = total.checked_add(value).ok_or(SumError::Overflow)?;
        count += 1;
        min = Some(min.map_or(value, |current| current.min(value)));
        max = Some(max.map_or(value, |current| current.max(value)));
    }

    Ok(SumResult {
        sum: SumValue::Precise(total),
        count,
        min: min.map(SumValue::Precise),
        max: max.map(SumValue::Precise),
        strategy: SelectedStrategy::Precise,
    })
}

/// Convert every input to a finite f64, failing atomically on the first
/// element that does not convert.
#[cfg(feature = "vectorized")]
fn convert_to_floats(inputs: &[NumericInput]) -> NumericResult<Vec<f64>> {
    inputs.iter().map(to_f64).collect()
}

#[cfg(feature = "vectorized")]
fn reduce_floats(reducer: &dyn SimdReducer, values: &[f64]) -> SumResult {
    let extrema = reducer.min_max(values);
    SumResult {
        sum: SumValue::Float(reducer.sum(values)),
        count: values.len(),
        min: extrema.map(|(lo, _)| SumValue::Float(lo)),
        max: extrema.map(|(_, hi)| SumValue::Float(hi)),
        strategy: SelectedStrategy::Vectorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(tokens: &[&str]) -> Vec<NumericInput> {
        tokens.iter().map(|t| NumericInput::from(*t)).collect()
    }

    #[test]
    #[should_panic(expected = "invalid configuration")]
    fn test_new_rejects_invalid_config() {
        let config = SumConfig::new().with_vectorized_min_len(0);
        let _ = SumEngine::new(config, Arc::new(NoOpEventHandler));
    }

    #[test]
    fn test_precise_sum_mixed_inputs() {
        let engine = SumEngine::with_defaults();
        let inputs = vec![
            NumericInput::from("1"),
            NumericInput::from("2.5"),
            NumericInput::from(3i64),
        ];

        let result = engine.sum(&inputs, Strategy::Precise).unwrap();
        assert_eq!(result.sum, SumValue::Precise(Decimal::new(65, 1)));
        assert_eq!(result.count, 3);
        assert_eq!(result.strategy, SelectedStrategy::Precise);
    }

    #[test]
    fn test_precise_sum_tracks_extrema() {
        let engine = SumEngine::with_defaults();
        let inputs = vec![
            NumericInput::from(4i64),
            NumericInput::from("-2.5"),
            NumericInput::from(7.25),
        ];

        let result = engine.sum(&inputs, Strategy::Precise).unwrap();
        assert_eq!(result.min, Some(SumValue::Precise(Decimal::new(-25, 1))));
        assert_eq!(result.max, Some(SumValue::Precise(Decimal::new(725, 2))));
    }

    #[test]
    fn test_precise_sum_avoids_float_artifacts() {
        let engine = SumEngine::with_defaults();
        let inputs = vec![NumericInput::from(0.1), NumericInput::from(0.2)];

        let result = engine.sum(&inputs, Strategy::Precise).unwrap();
        // Binary float would give 0.30000000000000004
        assert_eq!(result.sum.to_string(), "0.3");
    }

    #[test]
    fn test_invalid_token_fails_whole_call() {
        let engine = SumEngine::with_defaults();
        let result = engine.sum(&inputs(&["1", "abc", "3"]), Strategy::Precise);
        assert_eq!(result, Err(SumError::InvalidNumber("abc".to_string())));
    }

    #[test]
    fn test_invalid_token_references_offender() {
        let engine = SumEngine::with_defaults();
        let err = engine.sum(&inputs(&["abc"]), Strategy::Precise).unwrap_err();
        assert_eq!(err, SumError::InvalidNumber("abc".to_string()));
    }

    #[test]
    fn test_empty_input_precise() {
        let engine = SumEngine::with_defaults();
        let result = engine.sum(&[], Strategy::Precise).unwrap();
        assert_eq!(result.count, 0);
        assert_eq!(result.sum, SumValue::Precise(Decimal::ZERO));
        assert!(result.min.is_none());
        assert!(result.max.is_none());
    }

    #[test]
    fn test_idempotence() {
        let engine = SumEngine::with_defaults();
        let inputs = inputs(&["1.25", "-0.75", "100"]);

        let first = engine.sum(&inputs, Strategy::Precise).unwrap();
        let second = engine.sum(&inputs, Strategy::Precise).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_precise_overflow() {
        let engine = SumEngine::with_defaults();
        let huge = Decimal::MAX.to_string();
        let result = engine.sum(&inputs(&[&huge, &huge]), Strategy::Precise);
        assert_eq!(result, Err(SumError::Overflow));
    }

    #[cfg(feature = "vectorized")]
    #[test]
    fn test_vectorized_sum() {
        let engine = SumEngine::with_defaults();
        let inputs = vec![
            NumericInput::from(1i64),
            NumericInput::from(2i64),
            NumericInput::from(3.5),
            NumericInput::from("4.2"),
        ];

        let result = engine.sum(&inputs, Strategy::Vectorized).unwrap();
        assert_eq!(result.strategy, SelectedStrategy::Vectorized);
        assert_eq!(result.count, 4);
        assert!((result.sum.to_f64() - 10.7).abs() < 1e-9);
    }

    #[cfg(feature = "vectorized")]
    #[test]
    fn test_vectorized_rejects_bad_token() {
        let engine = SumEngine::with_defaults();
        let result = engine.sum(&inputs(&["1", "abc"]), Strategy::Vectorized);
        assert_eq!(result, Err(SumError::InvalidNumber("abc".to_string())));
    }

    #[cfg(feature = "vectorized")]
    #[test]
    fn test_vectorized_unavailable_after_disable() {
        let engine = SumEngine::with_defaults().without_vectorized();
        assert!(!engine.vectorized_available());

        let result = engine.sum(&inputs(&["1"]), Strategy::Vectorized);
        assert_eq!(result, Err(SumError::StrategyUnavailable));
    }

    #[cfg(not(feature = "vectorized"))]
    #[test]
    fn test_vectorized_unavailable_without_feature() {
        let engine = SumEngine::with_defaults();
        assert!(!engine.vectorized_available());

        let result = engine.sum(&inputs(&["1"]), Strategy::Vectorized);
        assert_eq!(result, Err(SumError::StrategyUnavailable));
    }

    #[test]
    fn test_auto_small_input_runs_precise() {
        let engine = SumEngine::with_defaults();
        let result = engine.sum(&inputs(&["1", "2.5"]), Strategy::Auto).unwrap();
        assert_eq!(result.strategy, SelectedStrategy::Precise);
        assert_eq!(result.sum.to_string(), "3.5");
    }

    #[cfg(feature = "vectorized")]
    #[test]
    fn test_auto_large_input_runs_vectorized() {
        let config = SumConfig::new().with_vectorized_min_len(4);
        let engine = SumEngine::new(config, Arc::new(NoOpEventHandler));

        let inputs: Vec<NumericInput> = (0..16).map(|i| NumericInput::from(i as f64)).collect();
        let result = engine.sum(&inputs, Strategy::Auto).unwrap();
        assert_eq!(result.strategy, SelectedStrategy::Vectorized);
        assert!((result.sum.to_f64() - 120.0).abs() < 1e-9);
    }

    #[cfg(feature = "vectorized")]
    #[test]
    fn test_auto_falls_back_on_unconvertible_input() {
        let config = SumConfig::new().with_vectorized_min_len(1);
        let engine = SumEngine::new(config, Arc::new(NoOpEventHandler));

        // "inf" defeats float conversion but is also not a valid decimal,
        // so the precise path reports the data error instead of masking it
        let result = engine.sum(&inputs(&["1", "inf"]), Strategy::Auto);
        assert!(matches!(result, Err(SumError::InvalidNumber(_))));

        // A high-precision decimal string still converts (with rounding),
        // so auto keeps the vectorized path
        let result = engine
            .sum(&inputs(&["0.10000000000000000001", "0.2"]), Strategy::Auto)
            .unwrap();
        assert_eq!(result.strategy, SelectedStrategy::Vectorized);
    }

    #[test]
    fn test_auto_agrees_with_precise_within_tolerance() {
        let config = SumConfig::new().with_vectorized_min_len(1);
        let engine = SumEngine::new(config, Arc::new(NoOpEventHandler));

        // All inputs exactly representable in binary floating point
        let inputs: Vec<NumericInput> =
            (0..256).map(|i| NumericInput::from(i as f64 * 0.25)).collect();

        let precise = engine.sum(&inputs, Strategy::Precise).unwrap();
        let auto = engine.sum(&inputs, Strategy::Auto).unwrap();

        let relative =
            (precise.sum.to_f64() - auto.sum.to_f64()).abs() / precise.sum.to_f64().abs();
        assert!(relative < 1e-9);
    }

    #[test]
    fn test_sum_with_request_emits_correlated_events() {
        use std::sync::Mutex;

        struct Recorder(Mutex<Vec<SumEvent>>);
        impl EventHandler for Recorder {
            fn on_event(&self, event: SumEvent) {
                self.0.lock().unwrap().push(event);
            }
        }

        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let engine = SumEngine::new(SumConfig::new(), recorder.clone());

        let id = RequestId::from_string("trace-7".to_string());
        engine
            .sum_with_request(id.clone(), &inputs(&["1", "2"]), Strategy::Precise)
            .unwrap();

        let events = recorder.0.lock().unwrap();
        assert!(events.iter().any(|e| matches!(
            e,
            SumEvent::RequestReceived { request_id, .. } if *request_id == id
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            SumEvent::Completed { request_id, count: 2, .. } if *request_id == id
        )));
    }

    #[test]
    fn test_failure_emits_failed_event() {
        use std::sync::Mutex;

        struct Recorder(Mutex<Vec<SumEvent>>);
        impl EventHandler for Recorder {
            fn on_event(&self, event: SumEvent) {
                self.0.lock().unwrap().push(event);
            }
        }

        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let engine = SumEngine::new(SumConfig::new(), recorder.clone());

        let _ = engine.sum(&inputs(&["abc"]), Strategy::Precise);

        let events = recorder.0.lock().unwrap();
        assert!(events.iter().any(|e| matches!(
            e,
            SumEvent::Failed { error, .. } if error.contains("abc")
        )));
    }
}
