//! Window chrome metrics

/// Frame metrics shared by hit testing and the DOM renderer
#[derive(Clone, Copy, Debug)]
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub resize_handle_size: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

/// Default chrome matching the stylesheet
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 32.0,
    resize_handle_size: 6.0,
    button_size: 20.0,
    button_spacing: 6.0,
    button_margin: 8.0,
};
