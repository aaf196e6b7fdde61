use avl_dictionary::dictionary::Dictionary;
use avl_dictionary::session;
use std::fs;
use std::io::Write;
use std::panic;

fn teardown(test_name: &str) {
    fs::remove_file(format!("{}.txt", test_name)).ok();
}

fn run_test<T>(test: T, test_name: &str)
where
    T: FnOnce() + panic::UnwindSafe,
{
    let result = panic::catch_unwind(test);

    teardown(test_name);

    assert!(result.is_ok());
}

#[test]
fn int_test_dictionary_file() {
    let test_name = "int_test_dictionary_file";
    run_test(
        || {
            let path = format!("{}.txt", test_name);
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "кот cat").unwrap();
            writeln!(file, "пёс dog").unwrap();
            writeln!(file, "пчела bee").unwrap();
            drop(file);

            let mut dictionary = Dictionary::new();
            assert_eq!(dictionary.load_from_path(&path).unwrap(), 3);
            assert_eq!(dictionary.heights(), (2, 2));

            let mut output = Vec::new();
            let input = "cat\nпёс\nлиса\nexit\nпчела\n";
            let lookups = session::lookup_loop(&dictionary, input.as_bytes(), &mut output).unwrap();
            assert_eq!(lookups, 3);

            let output = String::from_utf8(output).unwrap();
            assert!(output.contains("Translation: кот\n"));
            assert!(output.contains("Translation: dog\n"));
            assert!(output.contains("Word not found.\n"));
            assert!(!output.contains("Translation: bee\n"));
        },
        test_name,
    );
}

#[test]
fn int_test_dictionary_many_pairs() {
    let mut dictionary = Dictionary::new();
    let mut input = String::new();
    for i in 0..1000 {
        input.push_str(&format!("слово{:04} word{:04}\n", i, i));
    }

    assert_eq!(dictionary.load(input.as_bytes()).unwrap(), 1000);
    assert_eq!(dictionary.len(), 1000);

    let (forward, reverse) = dictionary.heights();
    assert!(forward <= 11 && reverse <= 11);

    assert_eq!(dictionary.translate("слово0420"), Some("word0420"));
    assert_eq!(dictionary.translate("word0999"), Some("слово0999"));
    assert_eq!(dictionary.translate("word1000"), None);

    let keys = dictionary.reverse().iter().map(|(key, _)| key.as_str()).collect::<Vec<&str>>();
    assert_eq!(keys.len(), 1000);
    assert_eq!(keys[0], "word0000");
    assert_eq!(keys[999], "word0999");
}
