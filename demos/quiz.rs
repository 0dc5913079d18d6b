//! End-to-end quiz session.
//!
//! Run with: `cargo run --example quiz`
//!
//! Set `RUST_LOG=debug` to see pool loads and reshuffles.
//!
//! 1. **Shelf** — list the textbooks offered for grade 7.
//! 2. **Units** — load a small library and list its units.
//! 3. **Session** — serve more questions than the pool holds (showing the
//!    reshuffle), auto-answer them and grade both halves.
//! 4. **Leaderboard** — record the session score and print the rank line.

use vocab_drill_gen::{
    books_for_grade, initials_from_name, intl_rank_text, spelling_feedback, Grade, Leaderboard,
    LibraryCatalog, MemoryStore, QuestionGenerator, ScoreSubmission,
};

const LIBRARY_ID: &str = "PEP_2022_grade7_up";

const LIBRARY_JSON: &str = r#"{
    "textbooks": [
        { "vocabulary": [
            { "word": "apple",   "meaning": "苹果", "false_meanings": ["香蕉", "橙子", "葡萄"], "phonetic": "/ˈæpl/", "part_of_speech": "n.", "unit": "Unit 1" },
            { "word": "orange",  "meaning": "橙子", "false_meanings": ["苹果", "梨", "桃子"], "part_of_speech": "n.", "unit": "Unit 1" },
            { "word": "ruler",   "meaning": "尺子", "false_meanings": ["铅笔", "橡皮", "书包"], "part_of_speech": "n.", "unit": "Unit 1" },
            { "word": "it's",    "meaning": "它是", "false_meanings": ["他是"], "unit": "Unit 1" },
            { "word": "teacher", "meaning": "老师", "false_meanings": ["学生", "医生", "护士"], "part_of_speech": "n.", "unit": "Unit 2" }
        ]}
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // ── Shelf ──────────────────────────────────────────────────────────────
    println!("══ Grade 7 textbooks ══");
    for book in books_for_grade(Grade::Grade7) {
        println!("  {:<12} {}", book.title, book.value);
    }
    println!();

    // ── Units ──────────────────────────────────────────────────────────────
    let mut catalog = LibraryCatalog::new();
    catalog.load_json(LIBRARY_ID, LIBRARY_JSON)?;
    println!("══ Units in {LIBRARY_ID} ══");
    for unit in catalog.units_of(LIBRARY_ID)? {
        println!("  {unit}");
    }
    println!();

    // ── Session ────────────────────────────────────────────────────────────
    let mut generator = QuestionGenerator::with_seed(7);
    let pool_size = generator.load_library(&catalog, LIBRARY_ID, Some("Unit 1"))?;
    println!("══ Session: {pool_size} words in pool ══");

    let mut score = 0u32;
    let rounds = pool_size + 2;
    for (n, mut q) in generator.next_questions(rounds).into_iter().enumerate() {
        // Every third question gets a wrong letter so the feedback has something to show.
        q.inputs = q.word.chars().map(|c| c.to_string()).collect();
        if n % 3 == 2 {
            q.inputs[0] = "x".to_string();
        }
        q.selected_option = q.options[q.correct_index].clone();
        q.submitted = true;

        let meaning_ok = q.check_meaning(&q.selected_option);
        let spelling_ok = q.check_spelling(&q.inputs);
        if meaning_ok && spelling_ok {
            score += 10;
        }

        let feedback = spelling_feedback(&q.word, &q.inputs);
        println!(
            "  [{}] {:<8} {:<10} options={:?}  meaning={} spelling={} wrong_at={:?}",
            q.id, q.word, q.phonetic, q.options, meaning_ok, spelling_ok, feedback.wrong_indices
        );
    }
    let stats = generator.stats();
    println!(
        "  stats: pool={} served={} remaining={}",
        stats.pool_size, stats.served, stats.remaining
    );
    println!();

    // ── Leaderboard ────────────────────────────────────────────────────────
    let mut board = Leaderboard::new(MemoryStore::new());
    let outcome = board.submit_score(ScoreSubmission {
        library_id: LIBRARY_ID.to_string(),
        score,
        finished_count: rounds as u32,
        accuracy_pct: f64::from(score) / (rounds as f64 * 10.0) * 100.0,
    })?;
    println!("══ Leaderboard ══");
    println!(
        "  {} ({}) scored {} → rank {}/{}",
        outcome.user.name,
        initials_from_name(&outcome.user.name),
        outcome.user.score,
        outcome.rank,
        outcome.total
    );
    println!("  {}", intl_rank_text(Some(outcome.rank), outcome.total));

    Ok(())
}
