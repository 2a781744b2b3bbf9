use outcomes_builder::bank::PhraseBank;
use outcomes_builder::i18n::Lang;
use outcomes_builder::variations::InOrderSampler;
use outcomes_builder::wizard::{Action, LAST_STEP, WizardState};

#[test]
fn full_walkthrough_in_english() {
    let bank = PhraseBank::default();
    let mut w = WizardState::new(Lang::En, "2 weeks");

    w.apply(Action::SetNivel("Secondary".into()));
    w.apply(Action::SetArea("Ciencias".into()));
    w.apply(Action::Next);
    w.apply(Action::SetNivelCognitivo("Aplicar".into()));
    w.apply(Action::SetVerbo("Solve".into()));
    w.apply(Action::Next);
    w.apply(Action::SetContenido("quadratic equations".into()));
    w.apply(Action::Next);
    w.apply(Action::SetCondicion("using a calculator".into()));
    w.apply(Action::Next);
    assert_eq!(w.step, 5);

    for _ in 0..3 {
        w.apply(Action::RemoveRubricRow(0));
    }
    assert_eq!(
        w.criterio,
        "correctly solving at least 4 of 5 exercises on quadratic equations"
    );

    w.apply(Action::Next);
    assert_eq!(w.step, 6);
    assert_eq!(
        w.resultado,
        "By the end of 2 weeks, the student will be able to solve quadratic equations using a calculator, correctly solving at least 4 of 5 exercises on quadratic equations."
    );

    w.generate_variations(&bank, &mut InOrderSampler);
    assert_eq!(w.variaciones.len(), 3);

    w.apply(Action::Next);
    assert_eq!(w.step, LAST_STEP);
    assert!(w.validacion.is_empty());

    w.apply(Action::Next);
    assert_eq!(w.step, LAST_STEP);
}

#[test]
fn back_and_goto_only_revisit_earlier_steps() {
    let mut w = WizardState::default();
    w.apply(Action::Back);
    assert_eq!(w.step, 1);
    w.apply(Action::SetNivel("Media".into()));
    w.apply(Action::SetArea("Historia".into()));
    w.apply(Action::Next);
    w.apply(Action::GoTo(5));
    assert_eq!(w.step, 2);
    w.apply(Action::GoTo(1));
    assert_eq!(w.step, 1);
}

#[test]
fn improve_adds_threshold_once() {
    let mut w = WizardState::default();
    w.apply(Action::EditResult("Al finalizar 1 clase, el estudiante será capaz de explicar   la fotosíntesis.".into()));
    w.apply(Action::Improve);
    assert!(w.resultado.ends_with("(Criterio: desempeño ≥70% según rúbrica)."));
    assert!(!w.resultado.contains("  "));
    let once = w.resultado.clone();
    w.apply(Action::Improve);
    assert_eq!(w.resultado, once);
}
