//! SelectionSet - named selections and their payoff matrix

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

// ============================================================================
// ERRORS
// ============================================================================

/// A move that is not part of the selection set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("{0} is not a valid selection")]
    InvalidSelection(String),
}

/// A malformed selection set definition
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Selection set must contain at least one selection")]
    EmptySelections,

    #[error("Duplicate selection: {0}")]
    DuplicateSelection(String),

    #[error("Relation matrix has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },

    #[error("Relation row {row} has {found} entries, expected {expected}")]
    RowLength { row: usize, expected: usize, found: usize },

    #[error("Relation [{row}][{col}] = {value} is outside {{-1, 0, 1}}")]
    InvalidRelation { row: usize, col: usize, value: i8 },

    #[error("{0} must tie against itself")]
    SelfPlayNotTie(String),

    #[error("Relations between {0} and {1} are not anti-symmetric")]
    NotAntiSymmetric(String, String),
}

// ============================================================================
// SELECTION SET
// ============================================================================

/// Serialized shape of a selection set, validated on conversion
#[derive(Clone, Debug, Serialize, Deserialize)]
struct SelectionSetDef {
    selections: Vec<String>,
    relations: Vec<Vec<i8>>,
}

/// Ordered selections plus the square payoff matrix between them.
///
/// `relations[i][j]` is the outcome for selection `i` played against `j`.
/// The matrix is validated at construction: square, entries in {-1, 0, 1},
/// ties on the diagonal and anti-symmetric everywhere else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SelectionSetDef", into = "SelectionSetDef")]
pub struct SelectionSet {
    selections: Vec<String>,
    relations: Vec<Vec<Outcome>>,
}

impl SelectionSet {
    /// Build a selection set from names and an integer payoff matrix
    pub fn new<S: Into<String>>(
        selections: Vec<S>,
        relations: Vec<Vec<i8>>,
    ) -> Result<Self, ConfigError> {
        let selections: Vec<String> = selections.into_iter().map(Into::into).collect();
        validate_selections(&selections)?;
        let relations = decode_relations(&selections, &relations)?;
        Ok(Self { selections, relations })
    }

    /// Resolve a pair of selections into the outcome for each side.
    ///
    /// The first outcome belongs to `selection1`, the second to `selection2`.
    pub fn get_result(
        &self,
        selection1: &str,
        selection2: &str,
    ) -> Result<(Outcome, Outcome), SelectionError> {
        let index1 = self.require(selection1)?;
        let index2 = self.require(selection2)?;
        Ok((self.relations[index1][index2], self.relations[index2][index1]))
    }

    /// Valid selection names in matrix order
    pub fn selections(&self) -> &[String] {
        &self.selections
    }

    /// Payoff matrix as outcomes
    pub fn relations(&self) -> &[Vec<Outcome>] {
        &self.relations
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Matrix index of a selection
    pub fn index_of(&self, selection: &str) -> Option<usize> {
        self.selections.iter().position(|s| s == selection)
    }

    pub fn contains(&self, selection: &str) -> bool {
        self.index_of(selection).is_some()
    }

    /// Per-selection win rate within the matrix itself.
    ///
    /// Each weight is `wins / (wins + losses)` over that selection's row.
    /// Ties are excluded; a row with neither wins nor losses weighs 0.
    pub fn win_rate_weights(&self) -> Vec<f64> {
        self.relations
            .iter()
            .map(|row| {
                let wins = row.iter().filter(|&&o| o == Outcome::Win).count();
                let losses = row.iter().filter(|&&o| o == Outcome::Lose).count();
                let decided = wins + losses;
                if decided == 0 {
                    0.0
                } else {
                    wins as f64 / decided as f64
                }
            })
            .collect()
    }

    fn require(&self, selection: &str) -> Result<usize, SelectionError> {
        self.index_of(selection)
            .ok_or_else(|| SelectionError::InvalidSelection(selection.to_string()))
    }
}

impl TryFrom<SelectionSetDef> for SelectionSet {
    type Error = ConfigError;

    fn try_from(def: SelectionSetDef) -> Result<Self, Self::Error> {
        SelectionSet::new(def.selections, def.relations)
    }
}

impl From<SelectionSet> for SelectionSetDef {
    fn from(set: SelectionSet) -> Self {
        SelectionSetDef {
            relations: set
                .relations
                .iter()
                .map(|row| row.iter().map(|o| o.to_relation()).collect())
                .collect(),
            selections: set.selections,
        }
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

fn validate_selections(selections: &[String]) -> Result<(), ConfigError> {
    if selections.is_empty() {
        return Err(ConfigError::EmptySelections);
    }
    for (i, name) in selections.iter().enumerate() {
        if selections[..i].contains(name) {
            return Err(ConfigError::DuplicateSelection(name.clone()));
        }
    }
    Ok(())
}

fn decode_relations(
    selections: &[String],
    relations: &[Vec<i8>],
) -> Result<Vec<Vec<Outcome>>, ConfigError> {
    let size = selections.len();
    if relations.len() != size {
        return Err(ConfigError::RowCount {
            expected: size,
            found: relations.len(),
        });
    }

    let mut decoded = Vec::with_capacity(size);
    for (row, values) in relations.iter().enumerate() {
        if values.len() != size {
            return Err(ConfigError::RowLength {
                row,
                expected: size,
                found: values.len(),
            });
        }
        let outcomes = values
            .iter()
            .enumerate()
            .map(|(col, &value)| {
                Outcome::from_relation(value)
                    .ok_or(ConfigError::InvalidRelation { row, col, value })
            })
            .collect::<Result<Vec<_>, _>>()?;
        decoded.push(outcomes);
    }

    for i in 0..size {
        if decoded[i][i] != Outcome::Tie {
            return Err(ConfigError::SelfPlayNotTie(selections[i].clone()));
        }
        for j in (i + 1)..size {
            if decoded[i][j] != decoded[j][i].reverse() {
                return Err(ConfigError::NotAntiSymmetric(
                    selections[i].clone(),
                    selections[j].clone(),
                ));
            }
        }
    }

    Ok(decoded)
}

// ============================================================================
// TESTS
// ============================================================================
