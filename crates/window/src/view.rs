//! Windowed rendering: board, side panel, and the game-over screen.

use macroquad::prelude::*;

use crate::core::snapshot::FrameSnapshot;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, PALETTE};

/// Board block edge in pixels.
pub const BLOCK_SIZE: f32 = 30.0;

/// Side panel width in pixels.
pub const SIDE_PANEL: f32 = 150.0;

/// Grid line color between board cells.
const GRID_LINE: Color = Color::new(0.157, 0.157, 0.157, 1.0);

/// Window configuration for the macroquad entrypoint: the board area plus
/// the side panel, non-resizable.
pub fn window_conf() -> Conf {
    Conf {
        window_title: "Quadfall".to_owned(),
        window_width: (BOARD_WIDTH as f32 * BLOCK_SIZE + SIDE_PANEL) as i32,
        window_height: (BOARD_HEIGHT as f32 * BLOCK_SIZE) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Paint one frame from a snapshot.
pub fn draw_frame(snap: &FrameSnapshot) {
    clear_background(BLACK);

    // Settled cells plus the background grid.
    for row in 0..BOARD_HEIGHT {
        for col in 0..BOARD_WIDTH {
            let x = col as f32 * BLOCK_SIZE;
            let y = row as f32 * BLOCK_SIZE;
            if let Some(color) = cell_color(snap.board[row][col]) {
                draw_rectangle(x, y, BLOCK_SIZE, BLOCK_SIZE, color);
            }
            draw_rectangle_lines(x, y, BLOCK_SIZE, BLOCK_SIZE, 1.0, GRID_LINE);
        }
    }

    // Active piece. Rows above the top edge stay invisible.
    if let Some(color) = cell_color(snap.active.color.get()) {
        for (row, col) in snap.active.shape.cells() {
            let board_row = snap.active.at.row + row as i32;
            let board_col = snap.active.at.col + col as i32;
            if board_row < 0 {
                continue;
            }
            let x = board_col as f32 * BLOCK_SIZE;
            let y = board_row as f32 * BLOCK_SIZE;
            draw_rectangle(x, y, BLOCK_SIZE, BLOCK_SIZE, color);
            draw_rectangle_lines(x, y, BLOCK_SIZE, BLOCK_SIZE, 1.0, GRID_LINE);
        }
    }

    draw_side_panel(snap);

    if snap.game_over {
        draw_game_over();
    }
}

fn draw_side_panel(snap: &FrameSnapshot) {
    let panel_x = BOARD_WIDTH as f32 * BLOCK_SIZE + 10.0;
    draw_text(&format!("Score: {}", snap.score), panel_x, 30.0, 24.0, WHITE);
    draw_text(&format!("Level: {}", snap.level), panel_x, 60.0, 24.0, WHITE);

    if let Some(next) = &snap.next {
        draw_text("Next:", panel_x, 100.0, 24.0, WHITE);
        if let Some(color) = cell_color(next.color.get()) {
            // Half-size preview blocks.
            let scale = BLOCK_SIZE / 2.0;
            for (row, col) in next.shape.cells() {
                let x = panel_x + col as f32 * scale;
                let y = 120.0 + row as f32 * scale;
                draw_rectangle(x, y, scale, scale, color);
            }
        }
    }
}

fn draw_game_over() {
    let text = "Game Over";
    let size = measure_text(text, None, 48, 1.0);
    let x = (screen_width() - size.width) / 2.0;
    let y = screen_height() / 2.0;
    draw_text(text, x, y, 48.0, WHITE);
}

/// Palette color for a snapshot cell value, `None` for empty.
fn cell_color(v: u8) -> Option<Color> {
    let idx = (v as usize).checked_sub(1)?;
    PALETTE
        .get(idx)
        .map(|&(r, g, b)| Color::from_rgba(r, g, b, 255))
}
