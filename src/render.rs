use std::io::Write;

use crossterm::{
    queue,
    style::{Color, Print, PrintStyledContent, Stylize},
};

use crate::maze::Grid;

/// One piece of the text layout of a maze.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Glyph {
    Corner,
    HorizontalWall,
    HorizontalGap,
    VerticalWall,
    VerticalGap,
    Floor,
    Start,
    Goal,
}

impl Glyph {
    fn symbol(&self) -> &'static str {
        match self {
            Glyph::Corner => "+",
            Glyph::HorizontalWall => "--",
            Glyph::HorizontalGap => "  ",
            Glyph::VerticalWall => "|",
            Glyph::VerticalGap => " ",
            Glyph::Floor => "  ",
            Glyph::Start => "S ",
            Glyph::Goal => "G ",
        }
    }

    /// Width in terminal columns.
    fn width(&self) -> usize {
        match self {
            Glyph::Corner | Glyph::VerticalWall | Glyph::VerticalGap => 1,
            _ => 2,
        }
    }

    fn color(&self) -> Color {
        match self {
            Glyph::Corner | Glyph::HorizontalWall | Glyph::VerticalWall => Color::Blue,
            Glyph::Start => Color::Green,
            Glyph::Goal => Color::Red,
            _ => Color::Reset,
        }
    }
}

/// Lays the maze out as `2 * height + 1` lines of glyphs.
fn layout(grid: &Grid) -> Vec<Vec<Glyph>> {
    let wall = |open: bool, closed: Glyph, gap: Glyph| if open { gap } else { closed };
    let mut lines = Vec::with_capacity(grid.height() as usize * 2 + 1);

    let mut top = vec![Glyph::Corner];
    for cell in &grid[0] {
        top.push(wall(
            !cell.walls.top,
            Glyph::HorizontalWall,
            Glyph::HorizontalGap,
        ));
        top.push(Glyph::Corner);
    }
    lines.push(top);

    for row in grid.rows() {
        let mut body = Vec::with_capacity(row.len() * 2 + 1);
        let mut floor = vec![Glyph::Corner];
        for cell in row {
            body.push(wall(
                !cell.walls.left,
                Glyph::VerticalWall,
                Glyph::VerticalGap,
            ));
            body.push(if cell.coord() == grid.entrance() {
                Glyph::Start
            } else if cell.coord() == grid.exit() {
                Glyph::Goal
            } else {
                Glyph::Floor
            });
            floor.push(wall(
                !cell.walls.bottom,
                Glyph::HorizontalWall,
                Glyph::HorizontalGap,
            ));
            floor.push(Glyph::Corner);
        }
        if let Some(last) = row.last() {
            body.push(wall(
                !last.walls.right,
                Glyph::VerticalWall,
                Glyph::VerticalGap,
            ));
        }
        lines.push(body);
        lines.push(floor);
    }
    lines
}

/// Renders the maze as plain text, one `String` line per wall row and cell row.
/// The entrance is marked `S` and the exit `G`.
pub fn render_ascii(grid: &Grid) -> String {
    layout(grid)
        .iter()
        .map(|line| line.iter().map(Glyph::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the maze to a terminal with coloured walls, entrance and exit.
pub fn print_styled<W: Write>(grid: &Grid, out: &mut W) -> std::io::Result<()> {
    for line in layout(grid) {
        for glyph in line {
            #[cfg(debug_assertions)]
            {
                use unicode_width::UnicodeWidthStr;
                assert_eq!(
                    glyph.symbol().width(),
                    glyph.width(),
                    "Glyph {:?} must keep the grid aligned.",
                    glyph
                );
            }
            queue!(out, PrintStyledContent(glyph.symbol().with(glyph.color())))?;
        }
        queue!(out, Print("\r\n"))?;
    }
    out.flush()
}
