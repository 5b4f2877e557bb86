//! TermScreen: the terminal front end's complete presentation stack.
//!
//! Bundles the framebuffer, the game view, and the diff renderer behind
//! the engine's `Renderer` seam, and owns terminal setup and teardown.

use anyhow::Result;
use crossterm::terminal;

use crate::core::session::Renderer;
use crate::core::snapshot::FrameSnapshot;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TermScreen {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TermScreen {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal to its normal state.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Default for TermScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TermScreen {
    fn present(&mut self, snapshot: &FrameSnapshot) -> Result<()> {
        // Querying the size every frame keeps resizes working without a
        // resize-event listener; a changed size forces a full redraw.
        let (width, height) = terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(snapshot, Viewport::new(width, height), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
