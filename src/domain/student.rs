use serde::Deserialize;

/// A student and the score read from the grade file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub score: u32,
}

impl Student {
    #[allow(dead_code)]
    pub fn new(id: u32, name: impl Into<String>, score: u32) -> Self {
        Self {
            id,
            name: name.into(),
            score,
        }
    }

    /// Letter grade on the usual ten-point scale.
    pub fn letter_grade(&self) -> char {
        match self.score {
            s if s >= 90 => 'A',
            80..=89 => 'B',
            70..=79 => 'C',
            60..=69 => 'D',
            _ => 'F',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_grade_boundaries() {
        let grades: Vec<char> = [100, 90, 89, 80, 79, 70, 69, 60, 59, 0]
            .into_iter()
            .map(|score| Student::new(1, "s", score).letter_grade())
            .collect();
        assert_eq!(grades, vec!['A', 'A', 'B', 'B', 'C', 'C', 'D', 'D', 'F', 'F']);
    }
}
