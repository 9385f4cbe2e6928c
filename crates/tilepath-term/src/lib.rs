//! Terminal rendering of tilepath grids.
//!
//! [`draw_grid`] writes a grid as rows of three-character tiles, optionally
//! overlaid with a search's predecessor arrows, its path, and the two
//! endpoints. Colour is emitted as crossterm commands, so the output is
//! meant for a terminal; turn it off with [`Style::color`] for logs or tests.

use std::collections::{HashMap, HashSet};
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use tilepath_core::Point;
use tilepath_paths::Grid;

/// What to draw on top of the bare grid.
#[derive(Debug, Clone)]
pub struct Style<'a> {
    point_to: Option<&'a HashMap<Point, Option<Point>>>,
    path: HashSet<Point>,
    start: Option<Point>,
    goal: Option<Point>,
    color: bool,
}

impl Default for Style<'_> {
    fn default() -> Self {
        Self {
            point_to: None,
            path: HashSet::new(),
            start: None,
            goal: None,
            color: true,
        }
    }
}

impl<'a> Style<'a> {
    /// A style with no overlays and colour enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw an arrow on every cell toward its predecessor.
    pub fn point_to(mut self, came_from: &'a HashMap<Point, Option<Point>>) -> Self {
        self.point_to = Some(came_from);
        self
    }

    /// Mark the cells of `path`.
    pub fn path(mut self, path: &[Point]) -> Self {
        self.path = path.iter().copied().collect();
        self
    }

    /// Mark the start cell.
    pub fn start(mut self, p: Point) -> Self {
        self.start = Some(p);
        self
    }

    /// Mark the goal cell.
    pub fn goal(mut self, p: Point) -> Self {
        self.goal = Some(p);
        self
    }

    /// Enable or disable colour output.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }
}

/// A rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    /// Points toward the cell's predecessor.
    Arrow(char),
    Path,
    Start,
    Goal,
    Wall,
}

impl Tile {
    /// The three-character text of the tile.
    pub fn text(self) -> String {
        match self {
            Tile::Empty => " . ".to_owned(),
            Tile::Arrow(c) => format!(" {c} "),
            Tile::Path => " @ ".to_owned(),
            Tile::Start => " A ".to_owned(),
            Tile::Goal => " Z ".to_owned(),
            Tile::Wall => "###".to_owned(),
        }
    }

    fn color(self) -> Option<Color> {
        match self {
            Tile::Path => Some(Color::DarkGreen),
            Tile::Start => Some(Color::DarkBlue),
            Tile::Goal => Some(Color::DarkYellow),
            Tile::Wall => Some(Color::DarkRed),
            Tile::Empty | Tile::Arrow(_) => None,
        }
    }
}

/// Arrow from `p` toward `prev`, if they are orthogonal neighbours.
fn arrow(p: Point, prev: Point) -> Option<char> {
    match (prev.x - p.x, prev.y - p.y) {
        (1, 0) => Some('>'),
        (-1, 0) => Some('<'),
        (0, 1) => Some('v'),
        (0, -1) => Some('^'),
        _ => None,
    }
}

/// The tile shown at `p`. Later layers win: arrows, path, start, goal,
/// and finally walls.
pub fn tile_at(grid: &Grid, p: Point, style: &Style<'_>) -> Tile {
    let mut tile = Tile::Empty;
    if let Some(Some(prev)) = style.point_to.and_then(|cf| cf.get(&p)) {
        if let Some(c) = arrow(p, *prev) {
            tile = Tile::Arrow(c);
        }
    }
    if style.path.contains(&p) {
        tile = Tile::Path;
    }
    if style.start == Some(p) {
        tile = Tile::Start;
    }
    if style.goal == Some(p) {
        tile = Tile::Goal;
    }
    if grid.is_wall(p) {
        tile = Tile::Wall;
    }
    tile
}

/// Write `grid` to `out`, framed by a `___` header and a `~~~` footer.
pub fn draw_grid<W: Write>(out: &mut W, grid: &Grid, style: &Style<'_>) -> io::Result<()> {
    let width = grid.width().max(0) as usize;
    queue!(out, Print("___".repeat(width)), Print('\n'))?;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let tile = tile_at(grid, Point::new(x, y), style);
            match tile.color().filter(|_| style.color) {
                Some(c) => queue!(out, SetForegroundColor(c), Print(tile.text()), ResetColor)?,
                None => queue!(out, Print(tile.text()))?,
            }
        }
        queue!(out, Print('\n'))?;
    }
    queue!(out, Print("~~~".repeat(width)), Print('\n'))?;
    out.flush()
}

/// [`draw_grid`] into a `String`.
///
/// Fails only if crossterm refuses a colour command for the writer.
pub fn render_to_string(grid: &Grid, style: &Style<'_>) -> io::Result<String> {
    let mut buf = Vec::new();
    draw_grid(&mut buf, grid, style)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_empty_grid() {
        let g = Grid::new(3, 2);
        let s = render_to_string(&g, &Style::new().color(false)).unwrap();
        assert_eq!(s, "_________\n .  .  . \n .  .  . \n~~~~~~~~~\n");
    }

    #[test]
    fn arrows_point_to_predecessor() {
        let g = Grid::new(3, 1);
        let mut cf = HashMap::new();
        cf.insert(Point::new(0, 0), None);
        cf.insert(Point::new(1, 0), Some(Point::new(0, 0)));
        cf.insert(Point::new(2, 0), Some(Point::new(1, 0)));
        let s = render_to_string(&g, &Style::new().point_to(&cf).color(false)).unwrap();
        assert_eq!(s.lines().nth(1), Some(" .  <  < "));

        assert_eq!(arrow(Point::new(1, 1), Point::new(2, 1)), Some('>'));
        assert_eq!(arrow(Point::new(1, 1), Point::new(1, 2)), Some('v'));
        assert_eq!(arrow(Point::new(1, 1), Point::new(1, 0)), Some('^'));
        assert_eq!(arrow(Point::new(1, 1), Point::new(3, 3)), None);
    }

    #[test]
    fn layers_override_in_order() {
        let g = Grid::new(4, 1).with_walls([Point::new(3, 0)]);
        let mut cf = HashMap::new();
        cf.insert(Point::new(1, 0), Some(Point::new(0, 0)));
        cf.insert(Point::new(2, 0), Some(Point::new(1, 0)));
        cf.insert(Point::new(3, 0), Some(Point::new(2, 0)));
        let path = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        let style = Style::new()
            .point_to(&cf)
            .path(&path)
            .start(Point::new(0, 0))
            .goal(Point::new(2, 0));
        assert_eq!(tile_at(&g, Point::new(0, 0), &style), Tile::Start);
        assert_eq!(tile_at(&g, Point::new(1, 0), &style), Tile::Path);
        assert_eq!(tile_at(&g, Point::new(2, 0), &style), Tile::Goal);
        assert_eq!(tile_at(&g, Point::new(3, 0), &style), Tile::Wall);
    }

    #[test]
    fn string_rendering_matches_writer_output() {
        let g = Grid::new(3, 2).with_walls([Point::new(1, 1)]);
        let style = Style::new().start(Point::new(0, 0)).goal(Point::new(2, 1));
        let mut buf = Vec::new();
        draw_grid(&mut buf, &g, &style).unwrap();
        assert_eq!(render_to_string(&g, &style).unwrap().into_bytes(), buf);
    }

    #[test]
    fn color_wraps_special_tiles() {
        let g = Grid::new(2, 1).with_walls([Point::new(1, 0)]);
        let colored = render_to_string(&g, &Style::new()).unwrap();
        assert!(colored.contains("###"));
        assert!(colored.contains('\u{1b}'));
        let plain = render_to_string(&g, &Style::new().color(false)).unwrap();
        assert!(!plain.contains('\u{1b}'));
        assert_eq!(plain.lines().nth(1), Some(" . ###"));
    }
}
