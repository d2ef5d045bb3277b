//! Chart Rendering
//!
//! Chart.js configurations and the destroy-before-replace lifecycle of the
//! chart bound to each canvas.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::api::ScoreKind;
use crate::models::DailyVolume;

// ========================
// Chart.js bindings
// ========================

#[wasm_bindgen]
extern "C" {
    /// Chart.js instance (the host page loads the library as the `Chart` global)
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &ChartJs);
}

/// Whether the page loaded Chart.js
pub fn chart_library_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Chart")).unwrap_or(false)
}

// ========================
// Configuration
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub aspect_ratio: f64,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub title: AxisTitle,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

impl Axis {
    fn titled(text: &str) -> Self {
        Self {
            title: AxisTitle { display: true, text: text.to_string() },
            begin_at_zero: false,
            min: None,
            max: None,
        }
    }
}

const TEAL: &str = "rgba(75,192,192,1)";
const TEAL_FILL: &str = "rgba(75,192,192,0.2)";
const VIOLET: &str = "rgba(153,102,255,1)";
const VIOLET_FILL: &str = "rgba(153,102,255,0.5)";
const ORANGE: &str = "rgba(255,159,64,1)";
const ORANGE_FILL: &str = "rgba(255,159,64,0.5)";

/// Line chart of units sold per day
pub fn daily_volume_config(rows: &[DailyVolume]) -> ChartConfig {
    let mut y = Axis::titled("Quantity Sold");
    y.begin_at_zero = true;
    ChartConfig {
        chart_type: ChartType::Line,
        data: ChartData {
            labels: rows.iter().map(|r| r.date.clone()).collect(),
            datasets: vec![Dataset {
                label: "Daily Trade Volume".to_string(),
                data: rows.iter().map(|r| r.volume).collect(),
                border_color: TEAL.to_string(),
                background_color: TEAL_FILL.to_string(),
                fill: true,
                tension: 0.3,
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: true,
            aspect_ratio: 2.0,
            scales: Scales { x: Axis::titled("Date"), y },
        },
    }
}

/// Bar chart of one item's score, log-scaled into `[0, 1]`
pub fn score_config(kind: ScoreKind, item: &str, value: f64, max: f64) -> ChartConfig {
    let (border, fill) = match kind {
        ScoreKind::Stability => (VIOLET, VIOLET_FILL),
        ScoreKind::Volatility => (ORANGE, ORANGE_FILL),
    };
    let mut y = Axis::titled(kind.axis_title());
    y.begin_at_zero = true;
    y.min = Some(0.0);
    y.max = Some(1.0);
    ChartConfig {
        chart_type: ChartType::Bar,
        data: ChartData {
            labels: vec![item.to_string()],
            datasets: vec![Dataset {
                label: kind.title().to_string(),
                data: vec![log_scale(value, max)],
                border_color: border.to_string(),
                background_color: fill.to_string(),
                fill: false,
                tension: 0.0,
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: true,
            aspect_ratio: 2.0,
            scales: Scales { x: Axis::titled("Item"), y },
        },
    }
}

/// `ln(value + 1) / ln(max + 1)`, clamped to `[0, 1]`; `0` when `max <= 0`
pub fn log_scale(value: f64, max: f64) -> f64 {
    let denominator = max.max(0.0).ln_1p();
    if !value.is_finite() || !(denominator > 0.0) {
        return 0.0;
    }
    (value.max(0.0).ln_1p() / denominator).clamp(0.0, 1.0)
}

// ========================
// Lifecycle
// ========================

/// Something a single chart instance can be bound to
pub trait ChartSurface {
    type Instance;

    /// Detach and return the instance currently bound, if any
    fn take_attached(&self) -> Option<Self::Instance>;
    fn attach(&self, instance: Self::Instance);
    fn create(&self, config: &ChartConfig) -> Result<Self::Instance, String>;
    fn destroy(&self, instance: Self::Instance);
}

/// Replace whatever chart the surface shows with a new one
pub fn render_chart<S: ChartSurface>(surface: &S, config: &ChartConfig) -> Result<(), String> {
    if let Some(previous) = surface.take_attached() {
        surface.destroy(previous);
    }
    let instance = surface.create(config)?;
    surface.attach(instance);
    Ok(())
}

/// Canvas element; the live chart is kept in its `_chartInstance` property
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
}

const INSTANCE_KEY: &str = "_chartInstance";

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    fn key() -> JsValue {
        JsValue::from_str(INSTANCE_KEY)
    }
}

impl ChartSurface for CanvasSurface {
    type Instance = ChartJs;

    fn take_attached(&self) -> Option<ChartJs> {
        let current = js_sys::Reflect::get(&self.canvas, &Self::key()).ok()?;
        if current.is_undefined() || current.is_null() {
            return None;
        }
        let _ = js_sys::Reflect::delete_property(&self.canvas, &Self::key());
        Some(current.unchecked_into())
    }

    fn attach(&self, instance: ChartJs) {
        let _ = js_sys::Reflect::set(&self.canvas, &Self::key(), &instance);
    }

    fn create(&self, config: &ChartConfig) -> Result<ChartJs, String> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_config = config.serialize(&serializer).map_err(|e| e.to_string())?;
        ChartJs::new(&self.canvas, &js_config).map_err(|e| format!("{:?}", e))
    }

    fn destroy(&self, instance: ChartJs) {
        instance.destroy();
    }
}

/// Render into a canvas, logging instead of failing the page
pub fn render_on_canvas(canvas: HtmlCanvasElement, config: &ChartConfig) {
    if !chart_library_loaded() {
        log::warn!("[Chart] Chart.js not loaded, skipping chart");
        return;
    }
    match render_chart(&CanvasSurface::new(canvas), config) {
        Ok(()) => log::debug!("[Chart] rendered {:?} chart", config.chart_type),
        Err(e) => log::error!("[Chart] render failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_log_scale_bounds() {
        assert_eq!(log_scale(0.0, 10.0), 0.0);
        assert_eq!(log_scale(10.0, 10.0), 1.0);
        assert_eq!(log_scale(3.7, 3.7), 1.0);
        assert_eq!(log_scale(50.0, 10.0), 1.0);
        assert_eq!(log_scale(5.0, 0.0), 0.0);
        assert_eq!(log_scale(f64::NAN, 10.0), 0.0);
        assert_eq!(log_scale(-2.0, 10.0), 0.0);
    }

    #[test]
    fn test_log_scale_monotonic() {
        let max = 250.0;
        let mut previous = 0.0;
        for step in 0..=500 {
            let scaled = log_scale(step as f64 * 0.5, max);
            assert!(scaled >= previous, "dropped at {}", step);
            previous = scaled;
        }
    }

    #[test]
    fn test_daily_volume_config_shape() {
        let rows = crate::api::sample_daily_volume();
        let value = serde_json::to_value(daily_volume_config(&rows)).unwrap();
        assert_eq!(value["type"], "line");
        assert_eq!(value["data"]["labels"][0], "Mon");
        assert_eq!(value["data"]["datasets"][0]["label"], "Daily Trade Volume");
        assert_eq!(value["data"]["datasets"][0]["borderColor"], TEAL);
        assert_eq!(value["options"]["aspectRatio"], 2.0);
        assert_eq!(value["options"]["scales"]["x"]["title"]["text"], "Date");
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], true);
        assert!(value["options"]["scales"]["x"].get("beginAtZero").is_none());
    }

    #[test]
    fn test_score_config_scales_value() {
        let config = score_config(ScoreKind::Volatility, "Rope", 9.0, 9.0);
        assert_eq!(config.chart_type, ChartType::Bar);
        assert_eq!(config.data.labels, vec!["Rope"]);
        assert_eq!(config.data.datasets[0].data, vec![1.0]);
        assert_eq!(config.options.scales.y.max, Some(1.0));
    }

    /// Surface that tracks live instances by id
    #[derive(Default)]
    struct FakeSurface {
        attached: RefCell<Option<u32>>,
        next_id: Cell<u32>,
        live: RefCell<Vec<u32>>,
        destroyed: RefCell<Vec<u32>>,
    }

    impl ChartSurface for FakeSurface {
        type Instance = u32;

        fn take_attached(&self) -> Option<u32> {
            self.attached.borrow_mut().take()
        }

        fn attach(&self, instance: u32) {
            *self.attached.borrow_mut() = Some(instance);
        }

        fn create(&self, _config: &ChartConfig) -> Result<u32, String> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.live.borrow_mut().push(id);
            Ok(id)
        }

        fn destroy(&self, instance: u32) {
            self.live.borrow_mut().retain(|i| *i != instance);
            self.destroyed.borrow_mut().push(instance);
        }
    }

    #[test]
    fn test_rerender_destroys_previous_instance() {
        let surface = FakeSurface::default();
        let config = daily_volume_config(&crate::api::sample_daily_volume());

        render_chart(&surface, &config).unwrap();
        assert!(surface.destroyed.borrow().is_empty());

        render_chart(&surface, &config).unwrap();
        render_chart(&surface, &config).unwrap();
        assert_eq!(*surface.destroyed.borrow(), vec![0, 1]);
        assert_eq!(*surface.live.borrow(), vec![2]);
        assert_eq!(*surface.attached.borrow(), Some(2));
    }
}
