use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::JoinHandle;
use std::time::Duration;

use glam::Vec2;

use super::channel::HudReader;
use super::data::HudData;
use crate::error::VoxviewError;
use crate::options::HudOptions;

/// Straight line in overlay pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineSegment {
    /// First endpoint.
    pub start: Vec2,
    /// Second endpoint.
    pub end: Vec2,
}

/// Laid-out overlay for one snapshot, in pixels with the origin top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    /// Viewport width.
    pub width: u32,
    /// Viewport height.
    pub height: u32,
    /// Horizontal then vertical crosshair arm.
    pub crosshair: [LineSegment; 2],
    /// Crosshair stroke width.
    pub line_width: f32,
    /// Text size in points.
    pub font_size: f32,
    /// Top-left anchor of the readout text.
    pub text_origin: Vec2,
    /// Readout text.
    pub text: String,
}

impl OverlayFrame {
    /// Lay out the crosshair and readout for `data`.
    #[must_use]
    pub fn compose(data: &HudData, options: &HudOptions) -> Self {
        let center = Vec2::new(data.width as f32, data.height as f32) / 2.0;
        let arm = options.crosshair_size;
        let mut frame = Self {
            width: data.width,
            height: data.height,
            crosshair: [
                LineSegment {
                    start: center - Vec2::new(arm, 0.0),
                    end: center + Vec2::new(arm, 0.0),
                },
                LineSegment {
                    start: center - Vec2::new(0.0, arm),
                    end: center + Vec2::new(0.0, arm),
                },
            ],
            line_width: options.line_width,
            font_size: options.font_size,
            text_origin: Vec2::ZERO,
            text: data.readout(),
        };
        if options.flip_y {
            frame.flip_y();
        }
        frame
    }

    /// Mirror every coordinate vertically, for bottom-up texture uploads.
    pub fn flip_y(&mut self) {
        let h = self.height as f32;
        let flip = |p: Vec2| Vec2::new(p.x, h - p.y);
        for seg in &mut self.crosshair {
            seg.start = flip(seg.start);
            seg.end = flip(seg.end);
        }
        self.text_origin = flip(self.text_origin);
    }
}

enum Command {
    SetEnabled(bool),
    Shutdown,
}

/// Background thread turning HUD snapshots into overlay frames.
pub struct HudCompositor {
    command_tx: mpsc::Sender<Command>,
    overlay: triple_buffer::Output<Option<OverlayFrame>>,
    thread: Option<JoinHandle<()>>,
}

impl HudCompositor {
    /// Spawn the compositor thread reading from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`VoxviewError::ThreadSpawn`] if the thread fails to spawn.
    pub fn spawn(
        reader: HudReader,
        options: &HudOptions,
    ) -> Result<Self, VoxviewError> {
        let (command_tx, command_rx) = mpsc::channel();
        let (overlay_input, overlay_output) = triple_buffer::triple_buffer(&None);
        let options = options.clone();

        let thread = std::thread::Builder::new()
            .name("hud-compositor".into())
            .spawn(move || {
                let (mut reader, mut overlay_input) = (reader, overlay_input);
                Self::thread_loop(
                    &command_rx,
                    &mut reader,
                    &mut overlay_input,
                    &options,
                );
            })
            .map_err(VoxviewError::ThreadSpawn)?;
        log::info!("HUD compositor started");

        Ok(Self {
            command_tx,
            overlay: overlay_output,
            thread: Some(thread),
        })
    }

    /// Turn composition on or off. A disabled compositor keeps its last
    /// overlay.
    pub fn set_enabled(&self, enabled: bool) {
        let _ = self.command_tx.send(Command::SetEnabled(enabled));
    }

    /// Most recently composed overlay, if any. Never blocks.
    pub fn latest_overlay(&mut self) -> Option<OverlayFrame> {
        let _ = self.overlay.update();
        self.overlay.output_buffer_mut().clone()
    }

    /// Stop the thread and wait for it to finish.
    pub fn shutdown(&mut self) {
        let _ = self.command_tx.send(Command::Shutdown);
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                log::error!("HUD compositor thread panicked");
            } else {
                log::info!("HUD compositor stopped");
            }
        }
    }

    fn thread_loop(
        command_rx: &mpsc::Receiver<Command>,
        reader: &mut HudReader,
        overlay: &mut triple_buffer::Input<Option<OverlayFrame>>,
        options: &HudOptions,
    ) {
        let interval = Duration::from_millis(options.refresh_interval_ms.max(1));
        let mut enabled = options.enabled;
        loop {
            match command_rx.recv_timeout(interval) {
                Ok(Command::SetEnabled(on)) => enabled = on,
                Ok(Command::Shutdown) | Err(RecvTimeoutError::Disconnected) => {
                    break;
                }
                Err(RecvTimeoutError::Timeout) => {}
            }
            if !enabled {
                continue;
            }
            let Some(data) = reader.latest() else {
                continue;
            };
            if data.paused || data.width == 0 || data.height == 0 {
                continue;
            }
            overlay.write(Some(OverlayFrame::compose(&data, options)));
        }
    }
}

impl Drop for HudCompositor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
