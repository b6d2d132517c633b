use std::fmt;

use crate::cells::RectSide;
use crate::coordinates::{Cartesian2DCoordinate, Coordinate};
use crate::grid_traits::MazeGrid;
use crate::rectgrid::RectGrid;
use crate::units::{Height, Width};

// Hexagonal mazes are only drawn to images, the text rendering is rectangular grids only.
impl fmt::Display for RectGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";
        const CELL_BODY: &str = "   ";

        let Width(columns_count) = self.width();
        let Height(rows_count) = self.height();

        // Start by special case rendering the text for the top boundary
        let mut output = String::from(WALL_RD);
        for x in 0..columns_count {
            let coord = Cartesian2DCoordinate::new(x as isize, 0);
            output.push_str(WALL_LR_3);
            if self.is_neighbour_open(coord, RectSide::Right) {
                output.push_str(WALL_LR);
            } else if x == columns_count - 1 {
                output.push_str(WALL_LD);
            } else {
                output.push_str(WALL_LRD);
            }
        }
        output.push('\n');

        for (index_row, row) in self.iter_row().enumerate() {

            let is_last_row = index_row == rows_count - 1;

            // The left boundary of the row is special cased, the top of each cell is
            // the bottom of the cell above it.
            let mut row_middle_section_render = String::from(WALL_UD);
            let mut row_bottom_section_render = String::new();

            for (index_column, cell_coord) in row.into_iter().enumerate() {

                let render_cell_side = |side, passage_clear_text, blocking_wall_text| {
                    if self.is_neighbour_open(cell_coord, side) {
                        passage_clear_text
                    } else {
                        blocking_wall_text
                    }
                };
                let is_first_column = index_column == 0;
                let is_last_column = index_column == columns_count - 1;
                let right_open = self.is_neighbour_open(cell_coord, RectSide::Right);
                let bottom_open = self.is_neighbour_open(cell_coord, RectSide::Bottom);

                row_middle_section_render.push_str(CELL_BODY);
                row_middle_section_render.push_str(render_cell_side(RectSide::Right, " ", WALL_UD));

                if is_first_column {
                    row_bottom_section_render = if is_last_row {
                        String::from(WALL_RU)
                    } else if bottom_open {
                        String::from(WALL_UD)
                    } else {
                        String::from(WALL_RUD)
                    };
                }
                row_bottom_section_render
                    .push_str(render_cell_side(RectSide::Bottom, CELL_BODY, WALL_LR_3));

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => if right_open { WALL_LR } else { WALL_LRU },
                    (false, true) => if bottom_open { WALL_UD } else { WALL_LUD },
                    (false, false) => {
                        let right = cell_coord.neighbour_at(RectSide::Right);
                        let below = cell_coord.neighbour_at(RectSide::Bottom);
                        let show_right_section = !self.is_neighbour_open(right, RectSide::Bottom);
                        let show_down_section = !self.is_neighbour_open(below, RectSide::Right);
                        let show_up_section = !right_open;
                        let show_left_section = !bottom_open;

                        match (show_left_section,
                               show_right_section,
                               show_up_section,
                               show_down_section) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            _ => " ",
                        }
                    }
                };

                row_bottom_section_render.push_str(corner);
            }

            output.push_str(&row_middle_section_render);
            output.push('\n');
            output.push_str(&row_bottom_section_render);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}
