//! core::cube
//!
//! The 54-sticker cube model.
//!
//! # Layout
//!
//! Each face stores 9 colors in row-major order (`index = row * 3 + col`).
//! Index 4 is the center and is never moved by any turn, so a face is
//! always identified by its center color.
//!
//! # Invariants
//!
//! - Exactly 9 stickers of each color exist at all times
//! - The 6 centers keep their home colors
//!
//! Turns only permute stickers (see [`crate::core::moves`]), so both
//! invariants hold for every reachable state. States loaded from strings
//! are checked by [`CubeState::validate`] before they are accepted.
//!
//! # Example
//!
//! ```
//! use cubework::core::cube::CubeState;
//! use cubework::core::types::{Color, Face};
//!
//! let cube = CubeState::solved();
//! assert!(cube.is_solved());
//! assert_eq!(cube.row(Face::Front, 0), [Color::Orange; 3]);
//! assert_eq!(cube.serialize_face(Face::Top), "YYYYYYYYY");
//! ```

use thiserror::Error;

use crate::core::types::{Color, Face};

/// Number of stickers on one face.
pub const STICKERS_PER_FACE: usize = 9;

/// Index of the center sticker on every face.
pub const CENTER: usize = 4;

/// Errors raised when a persisted cube configuration is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidStateError {
    #[error("face {face}: expected {expected} stickers, found {found}")]
    WrongLength {
        face: Face,
        expected: usize,
        found: usize,
    },

    #[error("face {face}: unknown color code '{code}' at position {position}")]
    UnknownColor {
        face: Face,
        code: char,
        position: usize,
    },

    #[error("color {color} appears {count} times, expected 9")]
    ColorCount { color: Color, count: usize },

    #[error("face {face}: center must be {expected}, found {found}")]
    CenterMismatch {
        face: Face,
        expected: Color,
        found: Color,
    },
}

/// The full sticker state of one cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [[Color; STICKERS_PER_FACE]; 6],
}

impl CubeState {
    /// A solved cube: every face filled with its home color.
    pub fn solved() -> Self {
        let mut faces = [[Color::Yellow; STICKERS_PER_FACE]; 6];
        for face in Face::ALL {
            faces[face.index()] = [face.home_color(); STICKERS_PER_FACE];
        }
        Self { faces }
    }

    /// Read-only view of one face.
    pub fn face(&self, face: Face) -> &[Color; STICKERS_PER_FACE] {
        &self.faces[face.index()]
    }

    /// Color of a single sticker.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..=2`.
    pub fn sticker(&self, face: Face, row: usize, col: usize) -> Color {
        check_line(row);
        check_line(col);
        self.faces[face.index()][row * 3 + col]
    }

    /// The three colors of a row, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside `0..=2`.
    pub fn row(&self, face: Face, row: usize) -> [Color; 3] {
        check_line(row);
        let stickers = &self.faces[face.index()];
        let start = row * 3;
        [stickers[start], stickers[start + 1], stickers[start + 2]]
    }

    /// Overwrite a row, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside `0..=2`.
    pub fn set_row(&mut self, face: Face, row: usize, colors: [Color; 3]) {
        check_line(row);
        let start = row * 3;
        self.faces[face.index()][start..start + 3].copy_from_slice(&colors);
    }

    /// The three colors of a column, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is outside `0..=2`.
    pub fn column(&self, face: Face, col: usize) -> [Color; 3] {
        check_line(col);
        let stickers = &self.faces[face.index()];
        [stickers[col], stickers[3 + col], stickers[6 + col]]
    }

    /// Overwrite a column, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is outside `0..=2`.
    pub fn set_column(&mut self, face: Face, col: usize, colors: [Color; 3]) {
        check_line(col);
        let stickers = &mut self.faces[face.index()];
        stickers[col] = colors[0];
        stickers[3 + col] = colors[1];
        stickers[6 + col] = colors[2];
    }

    /// Spin a face's own stickers 90° clockwise. The center stays put.
    pub(crate) fn spin_clockwise(&mut self, face: Face) {
        let old = self.faces[face.index()];
        self.faces[face.index()] = [
            old[6], old[3], old[0], //
            old[7], old[4], old[1], //
            old[8], old[5], old[2],
        ];
    }

    /// Spin a face 90° counter-clockwise, as three clockwise spins.
    pub(crate) fn spin_counter_clockwise(&mut self, face: Face) {
        for _ in 0..3 {
            self.spin_clockwise(face);
        }
    }

    /// True iff every sticker matches its face's center.
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|stickers| stickers.iter().all(|&c| c == stickers[CENTER]))
    }

    /// Number of stickers of each color, indexed by [`Color::index`].
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0usize; 6];
        for stickers in &self.faces {
            for color in stickers {
                counts[color.index()] += 1;
            }
        }
        counts
    }

    /// Check the color-conservation and fixed-center invariants.
    ///
    /// # Errors
    ///
    /// - [`InvalidStateError::CenterMismatch`] if a center is not its home color
    /// - [`InvalidStateError::ColorCount`] if any color does not appear 9 times
    pub fn validate(&self) -> Result<(), InvalidStateError> {
        for face in Face::ALL {
            let found = self.faces[face.index()][CENTER];
            let expected = face.home_color();
            if found != expected {
                return Err(InvalidStateError::CenterMismatch {
                    face,
                    expected,
                    found,
                });
            }
        }

        let counts = self.color_counts();
        for color in Color::ALL {
            let count = counts[color.index()];
            if count != STICKERS_PER_FACE {
                return Err(InvalidStateError::ColorCount { color, count });
            }
        }

        Ok(())
    }

    /// Encode one face as 9 color letters in row-major order.
    pub fn serialize_face(&self, face: Face) -> String {
        self.faces[face.index()].iter().map(|c| c.code()).collect()
    }

    /// Return a copy of this cube with one face replaced by a decoded string.
    ///
    /// Checks what one face can decide alone: length, color codes and the
    /// center. The 9-per-color rule needs the whole cube, so use
    /// [`CubeState::from_face_strings`] to load one.
    ///
    /// # Errors
    ///
    /// - [`InvalidStateError::WrongLength`] if the string is not 9 characters
    /// - [`InvalidStateError::UnknownColor`] for any unrecognized letter
    /// - [`InvalidStateError::CenterMismatch`] if the center is not the face's home color
    pub fn deserialize_face(&self, face: Face, encoded: &str) -> Result<Self, InvalidStateError> {
        let stickers = decode_face(face, encoded)?;
        let mut next = self.clone();
        next.faces[face.index()] = stickers;
        Ok(next)
    }

    /// Build and validate a cube from six encoded faces.
    ///
    /// # Errors
    ///
    /// Any decoding error from a face string, then any invariant violation
    /// reported by [`CubeState::validate`].
    pub fn from_face_strings<S: AsRef<str>>(
        encoded: impl IntoIterator<Item = (Face, S)>,
    ) -> Result<Self, InvalidStateError> {
        let mut faces = [[Color::Yellow; STICKERS_PER_FACE]; 6];
        let mut seen = [false; 6];
        for (face, text) in encoded {
            faces[face.index()] = decode_face(face, text.as_ref())?;
            seen[face.index()] = true;
        }

        if let Some(face) = Face::ALL.into_iter().find(|f| !seen[f.index()]) {
            return Err(InvalidStateError::WrongLength {
                face,
                expected: STICKERS_PER_FACE,
                found: 0,
            });
        }

        let cube = Self { faces };
        cube.validate()?;
        Ok(cube)
    }

    /// All six faces encoded, in [`Face::ALL`] order.
    pub fn to_face_strings(&self) -> [(Face, String); 6] {
        Face::ALL.map(|face| (face, self.serialize_face(face)))
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

fn check_line(index: usize) {
    assert!(index < 3, "line index {index} out of range 0..=2");
}

fn decode_face(face: Face, encoded: &str) -> Result<[Color; STICKERS_PER_FACE], InvalidStateError> {
    let found = encoded.chars().count();
    if found != STICKERS_PER_FACE {
        return Err(InvalidStateError::WrongLength {
            face,
            expected: STICKERS_PER_FACE,
            found,
        });
    }

    let mut stickers = [Color::Yellow; STICKERS_PER_FACE];
    for (position, code) in encoded.chars().enumerate() {
        stickers[position] =
            Color::from_code(code).ok_or(InvalidStateError::UnknownColor {
                face,
                code,
                position,
            })?;
    }

    let expected = face.home_color();
    if stickers[CENTER] != expected {
        return Err(InvalidStateError::CenterMismatch {
            face,
            expected,
            found: stickers[CENTER],
        });
    }
    Ok(stickers)
}
