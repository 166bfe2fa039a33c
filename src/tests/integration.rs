#[cfg(test)]
mod integration_tests {

    use crate::{
        CAT, Cost, EUS, GLG, LanguageProfile, Numy, NumyError, TokenKind, Whitelist,
        profile::ProfileError,
        tagger::{Candidate, Candidates, TagError, Tagger},
    };
    use std::{borrow::Cow, fs, sync::Arc};

    #[test]
    fn sentence_basque() {
        let numy = Numy::builder().lang(EUS).build().unwrap();
        assert_eq!(
            numy.verbalize("1984an 3.5% igo zen").unwrap(),
            "mila bederatzi ehun eta laurogeita lau an hiru koma bost ehuneko igo zen"
        );
    }

    #[test]
    fn sentence_catalan() {
        let numy = Numy::builder().lang(CAT).build().unwrap();
        assert_eq!(
            numy.verbalize("Van venir 21 persones i -3 graus").unwrap(),
            "Van venir vint-i-un persones i menys tres graus"
        );
    }

    #[test]
    fn tagged_output() {
        let numy = Numy::builder().lang(GLG).build().unwrap();
        let n = numy.normalize("200 €").unwrap();
        assert_eq!(
            n.tagged(),
            r#"cardinal { value: "douscentos" } char { value: "€" }"#
        );
        assert_eq!(n.tokens[1].span, 4..7);
    }

    #[test]
    fn whitelist_takes_precedence() {
        let numy = Numy::builder()
            .lang(CAT)
            .whitelist(Whitelist::new().insert("112", "u u dos").insert("km/h", "quilòmetres per hora"))
            .build()
            .unwrap();
        let n = numy.normalize("112 a 90 km/h").unwrap();
        assert_eq!(n.tokens[0].kind, TokenKind::Whitelist);
        assert_eq!(n.text(), "u u dos a noranta quilòmetres per hora");
    }

    #[test]
    fn whitelist_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whitelist.tsv");
        fs::write(&path, "# abbreviations\nkm\tkilometro\n").unwrap();
        let numy = Numy::builder()
            .lang(EUS)
            .whitelist(Whitelist::from_tsv(&path).unwrap())
            .build()
            .unwrap();
        assert_eq!(numy.verbalize("5 km").unwrap(), "bost kilometro");
    }

    #[test]
    fn profile_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("percent.tsv"), "%\tpor cen\n").unwrap();
        let profile = LanguageProfile::builder(GLG)
            .load_dir(dir.path())
            .unwrap()
            .build()
            .unwrap();
        let numy = Numy::builder().profile(profile).build().unwrap();
        assert_eq!(numy.lang(), GLG);
        assert_eq!(numy.verbalize("7%").unwrap(), "sete por cen");
    }

    #[test]
    fn custom_profile_is_shared() {
        let profile = Arc::new(
            LanguageProfile::builder(EUS)
                .modify(|d| d.percent = Cow::Borrowed("portzentaje"))
                .build()
                .unwrap(),
        );
        let a = Numy::builder().profile(Arc::clone(&profile)).build().unwrap();
        let b = Numy::builder().profile(profile).build().unwrap();
        assert_eq!(a.verbalize("1%").unwrap(), b.verbalize("1%").unwrap());
        assert_eq!(a.verbalize("1%").unwrap(), "bat portzentaje");
    }

    #[test]
    fn bad_data_file_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("digit.tsv"), "# digits\n1\tun\nno tab here\n").unwrap();
        let err = LanguageProfile::builder(CAT).load_dir(dir.path()).err().unwrap();
        assert!(matches!(err, ProfileError::DataFile { line: 3, .. }), "{err}");
    }

    #[test]
    fn without_fallback_reports_uncovered() {
        let numy = Numy::builder().lang(EUS).without_fallback().build().unwrap();
        assert_eq!(numy.verbalize(" 20 ").unwrap(), "hogei");
        let err = numy.normalize("20 kg").unwrap_err();
        assert!(matches!(err, NumyError::Uncovered { offset: 3 }));
    }

    struct Shadow;

    impl Tagger for Shadow {
        fn name(&self) -> &'static str {
            "shadow"
        }
        fn kind(&self) -> TokenKind {
            TokenKind::Whitelist
        }
        fn cost(&self) -> Cost {
            Cost::CARDINAL
        }
        fn candidates(
            &self,
            _text: &str,
            _start: usize,
            _profile: &LanguageProfile,
            _out: &mut Candidates,
        ) -> Result<(), TagError> {
            Ok(())
        }
    }

    #[test]
    fn equal_costs_fail_at_build() {
        let err = Numy::builder().add_tagger(Shadow).build().err().unwrap();
        assert!(matches!(err, NumyError::CostTie("cardinal", "shadow", Cost::CARDINAL)));
    }

    struct Degrees;

    impl Tagger for Degrees {
        fn name(&self) -> &'static str {
            "degrees"
        }
        fn kind(&self) -> TokenKind {
            TokenKind::Whitelist
        }
        fn cost(&self) -> Cost {
            Cost(102)
        }
        fn candidates(
            &self,
            text: &str,
            start: usize,
            _profile: &LanguageProfile,
            out: &mut Candidates,
        ) -> Result<(), TagError> {
            if text[start..].starts_with('°') {
                out.push(Candidate {
                    end: start + '°'.len_utf8(),
                    value: "gradu".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn extra_taggers_join_the_lattice() {
        let numy = Numy::builder().add_tagger(Degrees).build().unwrap();
        assert_eq!(numy.taggers().count(), 3);
        assert_eq!(numy.verbalize("30°").unwrap(), "hogeita hamar gradu");
    }

    #[test]
    fn normalizer_is_shareable_across_threads() {
        let numy = Arc::new(Numy::builder().lang(CAT).build().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let numy = Arc::clone(&numy);
                std::thread::spawn(move || numy.verbalize(&format!("{}", 1000 + i)).unwrap())
            })
            .collect();
        let out: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(out[0], "mil");
        assert_eq!(out[3], "mil tres");
    }

    fn fastest_of_three(numy: &Numy, text: &str) -> std::time::Duration {
        (0..3)
            .map(|_| {
                let t = std::time::Instant::now();
                numy.normalize(text).unwrap();
                t.elapsed()
            })
            .min()
            .unwrap()
    }

    #[test]
    fn long_runs_normalize_in_linear_time() {
        let numy = Numy::builder().lang(CAT).build().unwrap();
        for unit in ["-", "1.", "+.", "%"] {
            let small = unit.repeat(32 * 1024 / unit.len());
            let large = unit.repeat(128 * 1024 / unit.len());
            let t_small = fastest_of_three(&numy, &small);
            let t_large = fastest_of_three(&numy, &large);
            // Four times the input; quadratic work would take sixteen times as long.
            assert!(
                t_large < t_small * 10 + std::time::Duration::from_millis(50),
                "`{unit}` run: {t_small:?} for 32 KiB, {t_large:?} for 128 KiB"
            );
        }
    }
}
