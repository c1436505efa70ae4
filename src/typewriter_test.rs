use super::*;

fn config(phrases: &[&str]) -> TypewriterConfig {
    TypewriterConfig { phrases: phrases.iter().map(|p| (*p).to_owned()).collect(), ..TypewriterConfig::default() }
}

fn run(writer: &mut Typewriter, ticks: usize) -> Vec<Tick> {
    (0..ticks).map(|_| writer.tick()).collect()
}

fn tick(text: &str, delay_ms: u32) -> Tick {
    Tick { text: text.to_owned(), delay_ms }
}

#[test]
fn empty_phrase_list_disables_the_effect() {
    assert!(Typewriter::new(&config(&[])).is_none());
}

#[test]
fn one_full_cycle_has_expected_frames_and_timing() {
    let mut writer = Typewriter::new(&config(&["ab", "c"])).unwrap();
    assert_eq!(
        run(&mut writer, 9),
        vec![
            tick("a", 55),
            tick("ab", 2200),
            tick("ab", 28),
            tick("a", 28),
            tick("", 400),
            tick("c", 2200),
            tick("c", 28),
            tick("", 400),
            tick("a", 55),
        ]
    );
}

#[test]
fn every_phrase_is_fully_typed_in_order_before_repeating() {
    let phrases = ["Data Scientist & PhD Candidate", "AI & Deep Learning Researcher", "Generative AI Enthusiast"];
    let mut writer = Typewriter::new(&config(&phrases)).unwrap();

    let mut completed = Vec::new();
    while completed.len() < phrases.len() * 2 {
        let frame = writer.tick();
        if frame.delay_ms == 2200 {
            completed.push(frame.text);
        }
    }
    let expected: Vec<String> = phrases.iter().chain(phrases.iter()).map(|p| (*p).to_owned()).collect();
    assert_eq!(completed, expected);
}

#[test]
fn typing_grows_one_character_at_a_time() {
    let mut writer = Typewriter::new(&config(&["hello"])).unwrap();
    let lens: Vec<usize> = run(&mut writer, 5).iter().map(|t| t.text.len()).collect();
    assert_eq!(lens, vec![1, 2, 3, 4, 5]);
    assert_eq!(writer.phase(), Phase::Deleting);
}

#[test]
fn wraps_back_to_first_phrase() {
    let mut writer = Typewriter::new(&config(&["x", "y"])).unwrap();
    // "x": type 1 + delete 2; "y": type 1 + delete 2.
    run(&mut writer, 6);
    assert_eq!(writer.phrase_index(), 0);
    assert_eq!(writer.tick(), tick("x", 2200));
}

#[test]
fn counts_unicode_characters_not_bytes() {
    let mut writer = Typewriter::new(&config(&["né"])).unwrap();
    assert_eq!(writer.tick(), tick("n", 55));
    assert_eq!(writer.tick(), tick("né", 2200));
}

#[test]
fn empty_phrase_does_not_stall_the_loop() {
    let mut writer = Typewriter::new(&config(&["", "z"])).unwrap();
    assert_eq!(writer.tick(), tick("", 2200));
    assert_eq!(writer.tick(), tick("", 400));
    assert_eq!(writer.tick(), tick("z", 2200));
}

#[test]
fn custom_timings_are_honored() {
    let cfg = TypewriterConfig { type_ms: 1, delete_ms: 2, hold_ms: 3, next_ms: 4, ..config(&["ab"]) };
    let mut writer = Typewriter::new(&cfg).unwrap();
    let delays: Vec<u32> = run(&mut writer, 5).iter().map(|t| t.delay_ms).collect();
    assert_eq!(delays, vec![1, 3, 2, 2, 4]);
}
