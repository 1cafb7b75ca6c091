use egui::Color32;
use log::info;

use crate::error::{Error, Result};

/// Dimensions and geometry of the sketchpad grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
    pub container_size: f32, // Width (and height) of the square container
    pub border_width: f32,
}

impl GridConfig {
    pub fn new(rows: usize, columns: usize, container_size: f32, border_width: f32) -> Result<Self> {
        let config = Self {
            rows,
            columns,
            container_size,
            border_width,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(Error::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if !(self.container_size > 0.0)
            || !(self.border_width >= 0.0)
            || self.border_width * 2.0 >= self.container_size
        {
            return Err(Error::InvalidGeometry {
                container_size: self.container_size,
                border_width: self.border_width,
            });
        }
        Ok(())
    }

    /// Drawable side length once the border is taken off both edges.
    pub fn inner_size(&self) -> f32 {
        self.container_size - self.border_width * 2.0
    }

    /// Cell width and height in pixels.
    ///
    /// Both come from the same container dimension: width is split over the
    /// columns, height over the rows.
    pub fn cell_size(&self) -> (f32, f32) {
        let inner = self.inner_size();
        (inner / self.columns as f32, inner / self.rows as f32)
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 16,
            columns: 16,
            container_size: 400.0,
            border_width: 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellId {
    pub row: usize,
    pub column: usize,
}

impl CellId {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// One unit square of the sketchpad. `None` means transparent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cell {
    pub color: Option<Color32>,
}

pub struct Grid {
    config: GridConfig,
    cells: Vec<Cell>,
    generation: u64,
}

impl Default for Grid {
    fn default() -> Self {
        let config = GridConfig::default();
        Self {
            config,
            cells: vec![Cell::default(); config.cell_count()],
            generation: 0,
        }
    }
}

impl Grid {
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cells: vec![Cell::default(); config.cell_count()],
            generation: 0,
        })
    }

    /// Throws away every cell and lays out a fresh `rows` x `columns` grid.
    pub fn build(&mut self, rows: usize, columns: usize) -> Result<()> {
        let config = GridConfig { rows, columns, ..self.config };
        config.validate()?;

        self.config = config;
        self.cells.clear();
        self.cells.resize(config.cell_count(), Cell::default());
        self.generation += 1;

        let (width, height) = config.cell_size();
        info!("built {}x{} grid, cells {:.2}x{:.2}px", rows, columns, width, height);
        Ok(())
    }

    /// Makes every cell transparent without touching the layout.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.color = None;
        }
        info!("cleared {} cells", self.cells.len());
    }

    pub fn get_config(&self) -> GridConfig {
        self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn columns(&self) -> usize {
        self.config.columns
    }

    pub fn cell_size(&self) -> (f32, f32) {
        self.config.cell_size()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Bumped on every rebuild; cells of different generations are different cells.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn contains(&self, id: CellId) -> bool {
        id.row < self.config.rows && id.column < self.config.columns
    }

    #[cfg(test)]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.index_of(id).map(|i| &self.cells[i])
    }

    /// Sets a cell's color. Returns false if the cell is not on the grid.
    pub fn paint(&mut self, id: CellId, color: Option<Color32>) -> bool {
        match self.index_of(id) {
            Some(i) => {
                self.cells[i].color = color;
                true
            }
            None => false,
        }
    }

    /// Cells in row-major order with their ids.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        let columns = self.config.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (CellId::new(i / columns, i % columns), cell))
    }

    fn index_of(&self, id: CellId) -> Option<usize> {
        if self.contains(id) {
            Some(id.row * self.config.columns + id.column)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, columns: usize) -> Grid {
        Grid::new(GridConfig::new(rows, columns, 400.0, 2.0).unwrap()).unwrap()
    }

    #[test]
    fn build_produces_rows_times_columns_cells() {
        let mut g = grid(16, 16);
        for (rows, columns) in [(1, 1), (3, 7), (100, 1), (64, 64)] {
            g.build(rows, columns).unwrap();
            assert_eq!(g.cell_count(), rows * columns);
            assert_eq!(g.cells().count(), rows * columns);
            assert!(g.cells().all(|(_, cell)| cell.color.is_none()));
        }
    }

    #[test]
    fn default_sketchpad_cells_are_square() {
        let g = grid(16, 16);
        assert_eq!(g.cell_size(), (24.75, 24.75));
        assert!(GridConfig::default().validate().is_ok());
        assert_eq!(Grid::default().cell_count(), 256);
    }

    #[test]
    fn cell_size_splits_width_by_columns_and_height_by_rows() {
        let mut g = grid(16, 16);
        g.build(4, 8).unwrap();
        let (w, h) = g.cell_size();
        assert!((w - 396.0 / 8.0).abs() < f32::EPSILON);
        assert!((h - 396.0 / 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn build_rejects_empty_dimensions() {
        let mut g = grid(16, 16);
        assert!(matches!(
            g.build(0, 5),
            Err(Error::InvalidDimensions { rows: 0, columns: 5 })
        ));
        // Failed rebuild leaves the old grid alone.
        assert_eq!(g.cell_count(), 256);
    }

    #[test]
    fn rejects_border_wider_than_container() {
        assert!(matches!(
            GridConfig::new(2, 2, 10.0, 5.0),
            Err(Error::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn clear_resets_colors_and_keeps_count() {
        let mut g = grid(4, 4);
        assert!(g.paint(CellId::new(1, 2), Some(Color32::RED)));
        assert!(g.paint(CellId::new(3, 3), Some(Color32::BLUE)));

        let generation = g.generation();
        g.clear();

        assert_eq!(g.cell_count(), 16);
        assert!(g.cells().all(|(_, cell)| cell.color.is_none()));
        // Same cells, only the paint is gone.
        assert_eq!(g.generation(), generation);
    }

    #[test]
    fn rebuild_discards_paint() {
        let mut g = grid(4, 4);
        g.paint(CellId::new(0, 0), Some(Color32::RED));
        let generation = g.generation();
        g.build(4, 4).unwrap();
        assert_eq!(g.cell(CellId::new(0, 0)).unwrap().color, None);
        assert!(g.generation() > generation);
    }

    #[test]
    fn paint_outside_grid_is_ignored() {
        let mut g = grid(2, 3);
        assert!(!g.paint(CellId::new(2, 0), Some(Color32::RED)));
        assert!(!g.paint(CellId::new(0, 3), Some(Color32::RED)));
        assert!(g.cell(CellId::new(0, 3)).is_none());
    }

    #[test]
    fn cells_iterate_row_major() {
        let g = grid(2, 3);
        let ids: Vec<CellId> = g.cells().map(|(id, _)| id).collect();
        assert_eq!(ids[0], CellId::new(0, 0));
        assert_eq!(ids[2], CellId::new(0, 2));
        assert_eq!(ids[3], CellId::new(1, 0));
        assert_eq!(ids[5], CellId::new(1, 2));
    }
}
