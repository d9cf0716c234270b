//! ui::net
//!
//! Text rendering of the cube as an unfolded net.
//!
//! ```text
//!       Y Y Y
//!       Y Y Y
//!       Y Y Y
//! G G G O O O B B B R R R
//! G G G O O O B B B R R R
//! G G G O O O B B B R R R
//!       W W W
//!       W W W
//!       W W W
//! ```
//!
//! Faces are drawn in their stored orientation, the same layout the
//! gesture resolver assumes.

use crate::core::cube::CubeState;
use crate::core::types::Face;

/// Width of one rendered face plus its separator.
const FACE_WIDTH: usize = 6;

/// Faces across the middle band, left to right.
const BAND: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];

/// One row of a face, e.g. `O O O`.
fn face_row(cube: &CubeState, face: Face, row: usize) -> String {
    cube.row(face, row)
        .iter()
        .map(|color| color.code().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single face as three lines.
pub fn render_face(cube: &CubeState, face: Face) -> String {
    (0..3)
        .map(|row| face_row(cube, face, row))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The whole cube as a nine-line net.
pub fn render_net(cube: &CubeState) -> String {
    let indent = " ".repeat(FACE_WIDTH);
    let mut lines = Vec::with_capacity(9);

    for row in 0..3 {
        lines.push(format!("{}{}", indent, face_row(cube, Face::Top, row)));
    }
    for row in 0..3 {
        let band: Vec<String> = BAND.iter().map(|&face| face_row(cube, face, row)).collect();
        lines.push(band.join(" "));
    }
    for row in 0..3 {
        lines.push(format!("{}{}", indent, face_row(cube, Face::Bottom, row)));
    }

    lines.join("\n")
}
