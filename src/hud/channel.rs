use super::data::HudData;

/// Render-loop side of the snapshot channel.
pub struct HudPublisher {
    input: triple_buffer::Input<Option<HudData>>,
}

/// Compositor side of the snapshot channel.
pub struct HudReader {
    output: triple_buffer::Output<Option<HudData>>,
}

/// Create a connected publisher/reader pair with no snapshot yet.
#[must_use]
pub fn channel() -> (HudPublisher, HudReader) {
    let (input, output) = triple_buffer::triple_buffer(&None);
    (HudPublisher { input }, HudReader { output })
}

impl HudPublisher {
    /// Replace the published snapshot. Never blocks.
    pub fn publish(&mut self, data: HudData) {
        self.input.write(Some(data));
    }
}

impl HudReader {
    /// Most recently published snapshot, if any. Never blocks.
    pub fn latest(&mut self) -> Option<HudData> {
        let _ = self.output.update();
        *self.output.output_buffer_mut()
    }
}
