//! Form state properties over a full 15-question survey

use fvs_common::{FormState, RatingCategory, ResponderField, SurveyVariant};

fn survey_form() -> FormState {
    FormState::new(SurveyVariant::SectionA.config().question_count())
}

fn fill_responder(form: &mut FormState) {
    form.set_responder_field(ResponderField::Name, "R. Rater");
    form.set_responder_field(ResponderField::Experience, "20");
    form.set_responder_field(ResponderField::Qualifications, "Clinical psychologist");
    form.set_responder_field(ResponderField::ExpertiseReason, "Validated three instruments");
}

#[test]
fn test_every_pair_reads_back_without_disturbing_others() {
    let mut form = survey_form();
    let n = form.question_count();

    for i in 0..n {
        for (ci, c) in RatingCategory::ALL.into_iter().enumerate() {
            let v = ((i + ci) % 4) as u8 + 1;
            let before = form.clone();
            form.set_rating(i, c, v).unwrap();

            assert_eq!(form.rating(i, c).map(|r| r.value()), Some(v));
            for j in 0..n {
                for d in RatingCategory::ALL {
                    if (j, d) != (i, c) {
                        assert_eq!(form.rating(j, d), before.rating(j, d));
                    }
                }
            }
        }
    }
}

#[test]
fn test_validate_passes_only_when_everything_is_set() {
    let mut form = survey_form();
    fill_responder(&mut form);
    let n = form.question_count();

    for i in 0..n {
        for c in RatingCategory::ALL {
            assert!(!form.validate(), "passed early before ({}, {})", i, c);
            form.set_rating(i, c, 4).unwrap();
        }
    }
    assert!(form.validate());
}

#[test]
fn test_blank_responder_field_fails_regardless_of_ratings() {
    for blank in ResponderField::ALL {
        for fully_rated in [false, true] {
            let mut form = survey_form();
            fill_responder(&mut form);
            form.set_responder_field(blank, " ");
            if fully_rated {
                for i in 0..form.question_count() {
                    for c in RatingCategory::ALL {
                        form.set_rating(i, c, 1).unwrap();
                    }
                }
            }
            assert!(!form.validate());
        }
    }
}
