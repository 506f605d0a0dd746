//! "How well do you remember us?" quiz generated from the memory records.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::config::QuizConfig;
use crate::records::{MemoryMoment, MemoryRecord, Mood, MomentDate};

const MIN_RECORDS: usize = 3;
const SNIPPET_CHARS: usize = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum QuestionKind {
    PhotoLocation,
    Mood,
    Description,
    Chronology,
    Season,
    TimeOfDay,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Question {
    pub kind: QuestionKind,
    pub text: String,
    pub options: Vec<String>,
    pub correct: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        self.options.get(option).is_some_and(|o| *o == self.correct)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "phase")]
pub enum QuizPhase {
    Asking,
    Checked {
        selected: usize,
        correct: bool,
        advance_at: f64,
    },
    Finished,
}

#[derive(Clone, Debug, Serialize)]
pub struct Quiz {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    phase: QuizPhase,
    reveal_ms: f64,
}

impl Quiz {
    pub fn new<R: Rng + ?Sized>(records: &[MemoryRecord], config: &QuizConfig, rng: &mut R) -> Self {
        let questions = generate_questions(records, config.max_questions, rng);
        let phase = if questions.is_empty() {
            QuizPhase::Finished
        } else {
            QuizPhase::Asking
        };
        Self {
            questions,
            current: 0,
            score: 0,
            phase,
            reveal_ms: config.reveal_ms,
        }
    }

    /// Lock in `option` for the current question. Returns whether it was
    /// right, or `None` when no answer is being taken.
    pub fn answer(&mut self, option: usize, now: f64) -> Option<bool> {
        self.tick(now);
        if self.phase != QuizPhase::Asking {
            return None;
        }
        let question = self.questions.get(self.current)?;
        if option >= question.options.len() {
            return None;
        }
        let correct = question.is_correct(option);
        if correct {
            self.score += 1;
        }
        self.phase = QuizPhase::Checked {
            selected: option,
            correct,
            advance_at: now + self.reveal_ms,
        };
        Some(correct)
    }

    /// Move past a checked answer once it has been on screen long enough.
    pub fn tick(&mut self, now: f64) -> bool {
        let QuizPhase::Checked { advance_at, .. } = self.phase else {
            return false;
        };
        if now < advance_at {
            return false;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.phase = QuizPhase::Asking;
        } else {
            self.phase = QuizPhase::Finished;
        }
        true
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::Finished => None,
            _ => self.questions.get(self.current),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    pub fn is_perfect(&self) -> bool {
        self.is_finished() && !self.questions.is_empty() && self.score as usize == self.questions.len()
    }
}

struct Entry<'a> {
    place: &'a str,
    moment: &'a MemoryMoment,
    when: Option<MomentDate>,
}

/// One question of each kind the records can support, padded by cycling to
/// `max_questions` and capped there.
pub fn generate_questions<R: Rng + ?Sized>(
    records: &[MemoryRecord],
    max_questions: usize,
    rng: &mut R,
) -> Vec<Question> {
    if records.len() < MIN_RECORDS {
        return Vec::new();
    }
    let mut entries: Vec<Entry> = records
        .iter()
        .flat_map(|r| {
            r.moments.iter().map(move |m| Entry {
                place: &r.name,
                moment: m,
                when: MomentDate::parse(&m.date),
            })
        })
        .collect();
    entries.shuffle(rng);
    let places: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();

    let mut questions = Vec::new();
    let mut used: Vec<usize> = Vec::new();

    if let Some((i, e)) = entries.iter().enumerate().find(|(_, e)| e.moment.image.is_some()) {
        used.push(i);
        questions.push(Question {
            kind: QuestionKind::PhotoLocation,
            text: "Where was this photo taken?".into(),
            options: place_options(&places, e.place, rng),
            correct: e.place.to_string(),
            image: e.moment.image.clone(),
        });
    }

    if let Some((i, e, mood)) = entries.iter().enumerate().find_map(|(i, e)| {
        let mood = e.moment.mood?;
        (e.moment.note.chars().count() > 20 && !used.contains(&i)).then_some((i, e, mood))
    }) {
        used.push(i);
        let mut options: Vec<Mood> = Mood::ALL.to_vec();
        options.shuffle(rng);
        options.truncate(4);
        if !options.contains(&mood) {
            options[0] = mood;
        }
        options.shuffle(rng);
        questions.push(Question {
            kind: QuestionKind::Mood,
            text: format!("On a date at \"{}\", what was the main vibe?", e.place),
            options: options.iter().map(|m| m.as_str().to_string()).collect(),
            correct: mood.as_str().to_string(),
            image: None,
        });
    }

    if let Some((_, e)) = entries
        .iter()
        .enumerate()
        .find(|(i, e)| e.moment.note.chars().count() > 50 && !used.contains(i))
    {
        let snippet: String = e.moment.note.chars().take(SNIPPET_CHARS).collect();
        questions.push(Question {
            kind: QuestionKind::Description,
            text: format!("Which location matches this memory: \"{snippet}...\"?"),
            options: place_options(&places, e.place, rng),
            correct: e.place.to_string(),
            image: None,
        });
    }

    let dated: Vec<(&Entry, MomentDate)> = entries.iter().filter_map(|e| Some((e, e.when?))).collect();
    if let Some((a, b)) = dated.iter().enumerate().find_map(|(i, a)| {
        dated[i + 1..].iter().find(|b| b.0.place != a.0.place).map(|b| (a, b))
    }) {
        let first = if a.1 < b.1 { a.0.place } else { b.0.place };
        let mut options = vec![a.0.place.to_string(), b.0.place.to_string()];
        options.shuffle(rng);
        questions.push(Question {
            kind: QuestionKind::Chronology,
            text: "Which of these memories happened first?".into(),
            options,
            correct: first.to_string(),
            image: None,
        });
    }

    if let Some((e, season)) = dated.iter().find_map(|(e, when)| season_of(when.month).map(|s| (e, s))) {
        questions.push(Question {
            kind: QuestionKind::Season,
            text: format!("In which season did we visit \"{}\"?", e.place),
            options: ["Spring", "Summer", "Autumn", "Winter"].map(String::from).to_vec(),
            correct: season.to_string(),
            image: None,
        });
    }

    if let Some((e, when)) = dated.first() {
        questions.push(Question {
            kind: QuestionKind::TimeOfDay,
            text: format!(
                "Did we visit \"{}\" in the morning, afternoon, or evening?",
                e.place
            ),
            options: ["Morning", "Afternoon", "Evening"].map(String::from).to_vec(),
            correct: time_of_day(when.hour).to_string(),
            image: None,
        });
    }

    let generated = questions.len();
    if generated > 0 {
        for i in 0..max_questions.saturating_sub(generated) {
            questions.push(questions[i % generated].clone());
        }
    }
    questions.truncate(max_questions);
    questions
}

/// The correct place plus up to three other places, shuffled.
fn place_options<R: Rng + ?Sized>(places: &[&str], correct: &str, rng: &mut R) -> Vec<String> {
    let mut others: Vec<&str> = places.iter().copied().filter(|p| *p != correct).collect();
    others.shuffle(rng);
    others.truncate(3);
    others.push(correct);
    others.shuffle(rng);
    others.into_iter().map(String::from).collect()
}

/// Only the unambiguous seasons are asked about.
fn season_of(month: u8) -> Option<&'static str> {
    match month {
        12 | 1 | 2 => Some("Winter"),
        6..=8 => Some("Summer"),
        _ => None,
    }
}

fn time_of_day(hour: u8) -> &'static str {
    if hour < 12 {
        "Morning"
    } else if hour > 18 {
        "Evening"
    } else {
        "Afternoon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_records;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn too_few_records_means_no_quiz() {
        let mut rng = StdRng::seed_from_u64(1);
        let quiz = Quiz::new(&builtin_records()[..2], &QuizConfig::default(), &mut rng);
        assert!(quiz.is_finished());
        assert!(quiz.current_question().is_none());
        assert!(!quiz.is_perfect());
    }

    #[test]
    fn builtin_records_fill_the_quiz() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let qs = generate_questions(builtin_records(), 8, &mut rng);
            assert_eq!(qs.len(), 8);
            for q in &qs {
                assert!(q.options.contains(&q.correct), "{q:?}");
                let mut opts = q.options.clone();
                opts.sort();
                opts.dedup();
                assert_eq!(opts.len(), q.options.len());
            }
            assert_eq!(qs[0].kind, QuestionKind::PhotoLocation);
            assert!(qs[0].image.is_some());
            assert!(qs.iter().any(|q| q.kind == QuestionKind::TimeOfDay));
        }
    }

    #[test]
    fn snippet_is_truncated() {
        let mut rng = StdRng::seed_from_u64(3);
        let qs = generate_questions(builtin_records(), 8, &mut rng);
        let q = qs.iter().find(|q| q.kind == QuestionKind::Description).unwrap();
        assert!(q.text.contains("...\"?"));
    }

    #[test]
    fn seasons_and_hours() {
        assert_eq!(season_of(12), Some("Winter"));
        assert_eq!(season_of(7), Some("Summer"));
        assert_eq!(season_of(4), None);
        assert_eq!(time_of_day(7), "Morning");
        assert_eq!(time_of_day(18), "Afternoon");
        assert_eq!(time_of_day(19), "Evening");
    }

    #[test]
    fn answer_then_advance_after_delay() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut quiz = Quiz::new(builtin_records(), &QuizConfig::default(), &mut rng);
        let q = quiz.current_question().unwrap().clone();
        let right = q.options.iter().position(|o| *o == q.correct).unwrap();
        assert_eq!(quiz.answer(right, 0.0), Some(true));
        assert_eq!(quiz.answer(right, 100.0), None);
        assert_eq!(quiz.score(), 1);
        assert!(!quiz.tick(1499.0));
        assert!(quiz.tick(1500.0));
        assert_eq!(quiz.current_index(), 1);
        assert_eq!(quiz.phase(), QuizPhase::Asking);
    }

    #[test]
    fn full_run_finishes_with_perfect_score() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut quiz = Quiz::new(builtin_records(), &QuizConfig::default(), &mut rng);
        let mut now = 0.0;
        while let Some(q) = quiz.current_question().cloned() {
            let right = q.options.iter().position(|o| *o == q.correct).unwrap();
            assert_eq!(quiz.answer(right, now), Some(true));
            now += 1500.0;
            quiz.tick(now);
        }
        assert!(quiz.is_finished());
        assert!(quiz.is_perfect());
        assert_eq!(quiz.score(), 8);
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut quiz = Quiz::new(builtin_records(), &QuizConfig::default(), &mut rng);
        assert_eq!(quiz.answer(99, 0.0), None);
        assert_eq!(quiz.phase(), QuizPhase::Asking);
    }
}
