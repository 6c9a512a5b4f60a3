mod display {
    mod text {
        use crate::value::repr;

        #[test]
        fn plain() {
            assert_eq!(repr("John").to_string(), "'John'");
        }

        #[test]
        fn empty() {
            assert_eq!(repr("").to_string(), "''");
        }

        #[test]
        fn single_quote_switches_to_double() {
            assert_eq!(repr("it's").to_string(), "\"it's\"");
        }

        #[test]
        fn both_quotes_escape_single() {
            assert_eq!(repr("it's \"x\"").to_string(), "'it\\'s \"x\"'");
        }

        #[test]
        fn escapes() {
            assert_eq!(repr("a\\b\nc\td\r").to_string(), "'a\\\\b\\nc\\td\\r'");
            assert_eq!(repr("\u{7}").to_string(), "'\\x07'");
            assert_eq!(repr("\u{85}").to_string(), "'\\x85'");
        }

        #[test]
        fn top_level_value_is_raw() {
            use crate::Value;

            assert_eq!(Value::from("John Doe").to_string(), "John Doe");
            assert_eq!(Value::Integer(-3).to_string(), "-3");
        }
    }

    mod list {
        use crate::{values, List};

        #[test]
        fn empty() {
            let x = List::new();

            let x = format!("{x}");
            assert_eq!(x, "[]");
        }

        #[test]
        fn one() {
            let x = List::from(values!["abcd" => Text]);

            let x = format!("{x}");
            assert_eq!(x, "['abcd']");
        }

        #[test]
        fn many() {
            let x = List::from(values![1 => Integer, "John" => Text, 8 => Integer, "a" => Text]);

            let x = format!("{x}");
            assert_eq!(x, "[1, 'John', 8, 'a']");
        }
    }

    mod tuple {
        use crate::{values, DisplayTuple, List};

        #[test]
        fn empty() {
            let x = DisplayTuple(());

            let x = format!("{x}");
            assert_eq!(x, "()");
        }

        #[test]
        fn one() {
            let x = DisplayTuple((1_i64,));

            let x = format!("{x}");
            assert_eq!(x, "(1,)");
        }

        #[test]
        fn many() {
            let x = DisplayTuple((1_i64, "a", 2_i64, "b"));

            let x = format!("{x}");
            assert_eq!(x, "(1, 'a', 2, 'b')");
        }

        #[test]
        fn nested() {
            let inner = List::from(values![9 => Integer]);
            let x = DisplayTuple(("x", inner, DisplayTuple((3_i64,))));

            let x = format!("{x}");
            assert_eq!(x, "('x', [9], (3,))");
        }

        #[test]
        fn arity_is_fixed() {
            let t: (i64, &str, i64, &str) = (1, "a", 2, "b");
            assert_eq!(DisplayTuple(t).arity(), 4);
        }
    }

    mod print_args {
        use crate::PrintArgs;

        #[test]
        fn joined_by_single_space() {
            let x = PrintArgs(&[&2, &"+", &3, &"=", &5]).to_string();
            assert_eq!(x, "2 + 3 = 5");
        }

        #[test]
        fn empty() {
            assert_eq!(PrintArgs(&[]).to_string(), "");
        }
    }
}

mod list {
    use crate::{values, List, Value};

    #[test]
    fn append_keeps_order() {
        let mut list = List::from(values![1 => Integer, "John" => Text, 8 => Integer, "a" => Text]);
        list.append(9_i64);

        assert_eq!(list.len(), 5);
        assert_eq!(list.get(4), Some(&Value::Integer(9)));
        assert_eq!(
            list.iter().take(4).cloned().collect::<Vec<_>>(),
            values![1 => Integer, "John" => Text, 8 => Integer, "a" => Text]
        );
    }

    #[test]
    fn duplicates_and_mixed_kinds() {
        let mut list = List::new();
        assert!(list.is_empty());
        list.append("a");
        list.append("a");
        list.append(1_i64);

        assert_eq!(list.to_string(), "['a', 'a', 1]");
    }
}

mod concat {
    use crate::value::concatenate;

    #[test]
    fn keeps_embedded_space() {
        assert_eq!(concatenate("John ".to_string(), "Doe"), "John Doe");
    }

    #[test]
    fn no_separator_added() {
        assert_eq!(concatenate("John".to_string(), "Doe"), "JohnDoe");
    }
}

mod script {
    use strum::IntoEnumIterator;
    use crate::script::{Step, TRANSCRIPT};
    use crate::{Accumulate, Runtime};

    fn run(step: Option<Step>) -> Vec<String> {
        let runtime = Runtime::create(Accumulate::default());
        match step {
            Some(step) => runtime.run_step(step).expect("step must succeed"),
            None => {
                runtime.start().expect("script must succeed");
            }
        }
        let o = runtime.output().borrow().acc().expect("accumulated");
        o
    }

    #[test]
    fn whole_transcript() {
        assert_eq!(run(None), TRANSCRIPT);
    }

    #[test]
    fn arithmetic_lines() {
        assert_eq!(run(Some(Step::Addition)), ["2 + 3 = 5"]);
        assert_eq!(run(Some(Step::Subtraction)), ["20 - 10 = 10"]);
        assert_eq!(run(Some(Step::Multiplication)), ["2 * 3 = 6"]);
        assert_eq!(run(Some(Step::FloorDivision)), ["20 / 10 = 2"]);
    }

    #[test]
    fn concatenation_line() {
        assert_eq!(run(Some(Step::Concatenation)), ["John Doe"]);
    }

    #[test]
    fn list_lines() {
        assert_eq!(run(Some(Step::List)), ["[1, 'John', 8, 'a']", "[1, 'John', 8, 'a', 9]"]);
    }

    #[test]
    fn each_step_matches_its_share() {
        for step in Step::iter() {
            assert_eq!(run(Some(step)), step.expected_output(), "{step:?}");
        }
    }

    #[test]
    fn shares_cover_transcript() {
        let joined = Step::iter().flat_map(|s| s.expected_output().iter().copied()).collect::<Vec<_>>();
        assert_eq!(joined, TRANSCRIPT);
    }

    #[test]
    fn step_names() {
        assert_eq!("floor_division".parse::<Step>(), Ok(Step::FloorDivision));
        assert_eq!(Step::Greeting.as_ref(), "greeting");
        assert!("division".parse::<Step>().is_err());
    }
}
