//! Display and scaling properties of a single data track, modelled on the
//! attributes of UCSC `track` lines.
//!
//! A loader creates one [`TrackProperties`] per track and sets whatever the
//! track description supplies; renderers read it back. Values are stored as
//! given, nothing is validated here.

use crate::{base_coord::BaseCoord, renderer::RendererKind, window_function::WindowFunction};
use egui::Color32;
use serde::{Deserialize, Serialize};

/// Value of `feature_visibility_window` meaning features are always drawn.
pub const UNBOUNDED_VISIBILITY_WINDOW: i32 = -1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackProperties {
    base_coord: BaseCoord,
    /// Displayed to the left of the track
    name: Option<String>,
    /// Popup text when hovering over the track
    description: Option<String>,
    /// Link associated with the track, currently unused
    url: Option<String>,
    /// Track height in pixels
    height: i32,
    min_height: i32,
    /// Default track color; individual features may override it (see `item_rgb`)
    color: Option<Color32>,
    /// Use depends on the renderer
    alt_color: Option<Color32>,
    mid_color: Option<Color32>,
    genome: Option<String>,
    offset: i32,
    auto_scale_flag: bool,
    #[serde(with = "json_float")]
    min_value: f32,
    #[serde(with = "json_float")]
    max_value: f32,
    #[serde(with = "json_float")]
    mid_value: f32,
    #[serde(with = "json_float")]
    neutral_from_value: f32,
    #[serde(with = "json_float")]
    neutral_to_value: f32,
    draw_y_line: bool,
    #[serde(with = "json_float")]
    y_line: f32,
    windowing_function: Option<WindowFunction>,
    smoothing_window: i32,
    renderer: Option<RendererKind>,
    item_rgb: bool,
    use_score: bool,
    feature_visibility_window: i32,
    log_scale: bool,
}

impl TrackProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the value axis should be scaled from the visible data: either
    /// requested explicitly, or because a bound was never supplied.
    pub fn is_auto_scale(&self) -> bool {
        self.auto_scale_flag || self.min_value.is_nan() || self.max_value.is_nan()
    }

    pub fn base_coord(&self) -> BaseCoord {
        self.base_coord
    }

    pub fn set_base_coord(&mut self, base_coord: BaseCoord) {
        self.base_coord = base_coord;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, url: Option<String>) {
        self.url = url;
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_height(&mut self, height: i32) {
        self.height = height;
    }

    pub fn min_height(&self) -> i32 {
        self.min_height
    }

    pub fn set_min_height(&mut self, min_height: i32) {
        self.min_height = min_height;
    }

    pub fn color(&self) -> Option<Color32> {
        self.color
    }

    pub fn set_color(&mut self, color: Option<Color32>) {
        self.color = color;
    }

    pub fn alt_color(&self) -> Option<Color32> {
        self.alt_color
    }

    pub fn set_alt_color(&mut self, alt_color: Option<Color32>) {
        self.alt_color = alt_color;
    }

    pub fn mid_color(&self) -> Option<Color32> {
        self.mid_color
    }

    pub fn set_mid_color(&mut self, mid_color: Option<Color32>) {
        self.mid_color = mid_color;
    }

    pub fn genome(&self) -> Option<&str> {
        self.genome.as_deref()
    }

    pub fn set_genome(&mut self, genome: Option<String>) {
        self.genome = genome;
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: i32) {
        self.offset = offset;
    }

    /// The explicit request only; see [`Self::is_auto_scale`] for the effective value.
    pub fn auto_scale_flag(&self) -> bool {
        self.auto_scale_flag
    }

    pub fn set_auto_scale(&mut self, auto_scale: bool) {
        self.auto_scale_flag = auto_scale;
    }

    pub fn min_value(&self) -> f32 {
        self.min_value
    }

    pub fn set_min_value(&mut self, min_value: f32) {
        self.min_value = min_value;
    }

    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    pub fn set_max_value(&mut self, max_value: f32) {
        self.max_value = max_value;
    }

    pub fn mid_value(&self) -> f32 {
        self.mid_value
    }

    pub fn set_mid_value(&mut self, mid_value: f32) {
        self.mid_value = mid_value;
    }

    pub fn neutral_from_value(&self) -> f32 {
        self.neutral_from_value
    }

    pub fn set_neutral_from_value(&mut self, neutral_from_value: f32) {
        self.neutral_from_value = neutral_from_value;
    }

    pub fn neutral_to_value(&self) -> f32 {
        self.neutral_to_value
    }

    pub fn set_neutral_to_value(&mut self, neutral_to_value: f32) {
        self.neutral_to_value = neutral_to_value;
    }

    pub fn draw_y_line(&self) -> bool {
        self.draw_y_line
    }

    pub fn set_draw_y_line(&mut self, draw_y_line: bool) {
        self.draw_y_line = draw_y_line;
    }

    pub fn y_line(&self) -> f32 {
        self.y_line
    }

    pub fn set_y_line(&mut self, y_line: f32) {
        self.y_line = y_line;
    }

    pub fn windowing_function(&self) -> Option<WindowFunction> {
        self.windowing_function
    }

    pub fn set_windowing_function(&mut self, windowing_function: Option<WindowFunction>) {
        self.windowing_function = windowing_function;
    }

    pub fn smoothing_window(&self) -> i32 {
        self.smoothing_window
    }

    pub fn set_smoothing_window(&mut self, smoothing_window: i32) {
        self.smoothing_window = smoothing_window;
    }

    pub fn renderer(&self) -> Option<RendererKind> {
        self.renderer
    }

    pub fn set_renderer(&mut self, renderer: Option<RendererKind>) {
        self.renderer = renderer;
    }

    /// Whether per-feature colors override the track color
    pub fn item_rgb(&self) -> bool {
        self.item_rgb
    }

    pub fn set_item_rgb(&mut self, item_rgb: bool) {
        self.item_rgb = item_rgb;
    }

    pub fn use_score(&self) -> bool {
        self.use_score
    }

    pub fn set_use_score(&mut self, use_score: bool) {
        self.use_score = use_score;
    }

    /// Largest span at which individual features are drawn, or
    /// [`UNBOUNDED_VISIBILITY_WINDOW`].
    pub fn feature_visibility_window(&self) -> i32 {
        self.feature_visibility_window
    }

    pub fn set_feature_visibility_window(&mut self, feature_visibility_window: i32) {
        self.feature_visibility_window = feature_visibility_window;
    }

    pub fn log_scale(&self) -> bool {
        self.log_scale
    }

    pub fn set_log_scale(&mut self, log_scale: bool) {
        self.log_scale = log_scale;
    }
}

impl Default for TrackProperties {
    fn default() -> Self {
        Self {
            base_coord: BaseCoord::Unspecified,
            name: None,
            description: None,
            url: None,
            height: 0,
            min_height: 0,
            color: None,
            alt_color: None,
            mid_color: None,
            genome: None,
            offset: 0,
            auto_scale_flag: false,
            min_value: f32::NAN,
            max_value: f32::NAN,
            mid_value: f32::NAN,
            neutral_from_value: f32::NAN,
            neutral_to_value: f32::NAN,
            draw_y_line: true,
            y_line: 0.0,
            windowing_function: None,
            smoothing_window: 0,
            renderer: None,
            item_rgb: true,
            use_score: false,
            feature_visibility_window: UNBOUNDED_VISIBILITY_WINDOW,
            log_scale: false,
        }
    }
}

/// JSON has no NaN or infinities. NaN (an unset bound) is written as `null`,
/// infinities as the strings `"inf"` and `"-inf"`.
mod json_float {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f32),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else if *value == f32::INFINITY {
            serializer.serialize_str("inf")
        } else if *value == f32::NEG_INFINITY {
            serializer.serialize_str("-inf")
        } else {
            serializer.serialize_f32(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(f32::NAN),
            Some(Repr::Number(value)) => Ok(value),
            Some(Repr::Text(text)) => match text.as_str() {
                "inf" => Ok(f32::INFINITY),
                "-inf" => Ok(f32::NEG_INFINITY),
                "nan" => Ok(f32::NAN),
                _ => Err(D::Error::custom(format!("invalid float '{text}'"))),
            },
        }
    }
}
