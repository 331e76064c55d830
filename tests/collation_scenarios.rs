// End-to-end scenarios: block selection, witness preparation and scoring
// through the public session API.

mod common;

use anyhow::Result;
use common::{collation_of, init_logging, positions_of};
use ferrous_collate::pipelines::collation::{
    BlockId, CellLookup, CellScorer, EditGraphTable, LcpCandidate, Step,
};
use ferrous_collate::{BlockScorer, CollateError, CollateOpt};

fn cat_dog_candidates() -> Vec<LcpCandidate> {
    // A = [0,3) "the cat sat", B = [4,7) "the dog sat"
    vec![
        LcpCandidate::new(vec![0, 4], 1, 0), // "the"
        LcpCandidate::new(vec![2, 6], 1, 0), // "sat"
    ]
}

#[test]
fn test_cat_dog_scenario() -> Result<()> {
    init_logging();
    let collation = collation_of(&["the cat sat", "the dog sat"]);
    let mut scorer = BlockScorer::new(&collation, cat_dog_candidates());

    assert_eq!(scorer.blocks().len(), 2);
    scorer.prepare_witness("A")?;
    scorer.prepare_witness("B")?;

    // "cat" and "dog" belong to no block
    assert!(scorer.occurrence_of(1).is_none());
    assert!(scorer.occurrence_of(5).is_none());

    let superbase = positions_of(&collation, "A");
    let table = scorer.align("B", &superbase)?;

    let the = table.cell(1, 1).expect("scored");
    assert!(the.is_match);
    assert_eq!(the.g, 0);
    assert_eq!(the.step, Step::Diagonal);

    let cat_dog = table.cell(2, 2).expect("scored");
    assert!(!cat_dog.is_match);
    assert_eq!(cat_dog.g, the.g - 2);

    let sat = table.cell(3, 3).expect("scored");
    assert!(sat.is_match);
    assert_eq!(sat.g, cat_dog.g);
    assert_eq!(sat.segments, 2);
    Ok(())
}

#[test]
fn test_self_repeat_is_not_a_block() -> Result<()> {
    init_logging();
    // "a" occurs twice inside the single witness
    let collation = collation_of(&["a a"]);
    let candidate = LcpCandidate::new(vec![0, 1], 1, 0);
    let mut scorer = BlockScorer::new(&collation, vec![candidate]);

    assert!(scorer.blocks().is_empty());
    let stats = scorer.selection_stats().expect("selected");
    assert_eq!(stats.accepted, 0);
    assert_eq!(stats.filtered_by_count + stats.filtered_by_self_repeat, 1);

    assert_eq!(scorer.prepare_witness("A")?, 0);
    assert!(scorer.index().is_empty());
    Ok(())
}

#[test]
fn test_self_repeat_rule_alone_excludes_candidate() {
    // Two witnesses so the occurrence-count rule does not apply
    let collation = collation_of(&["a a", "b"]);
    let candidate = LcpCandidate::new(vec![0, 1], 1, 0);
    let mut scorer = BlockScorer::new(&collation, vec![candidate]);
    assert!(scorer.blocks().is_empty());
    assert_eq!(scorer.selection_stats().unwrap().filtered_by_self_repeat, 1);
}

#[test]
fn test_longer_block_matches_every_token() -> Result<()> {
    init_logging();
    // A = [0,5), B = [6,11), C = [12,16)
    let collation = collation_of(&[
        "once upon a time there",
        "once upon a time here",
        "upon a time there",
    ]);
    let candidates = vec![
        LcpCandidate::new(vec![1, 7, 12], 3, 1),  // "upon a time"
        LcpCandidate::new(vec![0, 6], 4, 0),      // "once upon a time"
        LcpCandidate::new(vec![4, 15], 1, 0),     // "there"
    ];
    let mut scorer = BlockScorer::new(&collation, candidates);

    let blocks: Vec<_> = scorer.blocks().iter().cloned().collect();
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0].ranges.ranges(), &[1..4, 7..10, 12..15]);
    // "once upon a time" cut through the deeper block; only "once" survives
    assert_eq!(blocks[1].ranges.ranges(), &[0..1, 6..7]);
    assert_eq!(scorer.selection_stats().unwrap().accepted_after_shrink, 1);

    for sigil in ["A", "B", "C"] {
        scorer.prepare_witness(sigil)?;
    }
    let occ_a = scorer.occurrence_of(2).expect("indexed");
    let occ_c = scorer.occurrence_of(13).expect("indexed");
    assert_eq!(occ_a.block, occ_c.block);
    assert_eq!(occ_a.block, BlockId(0));

    let table = scorer.align("C", &positions_of(&collation, "A"))?;
    // C skips "once"; "upon a time" and "there" line up as one unbroken run
    assert_eq!(table.score(), Some(-1));
    assert_eq!(table.segments(), Some(1));
    Ok(())
}

#[test]
fn test_idempotent_preparation() -> Result<()> {
    let collation = collation_of(&["the cat sat", "the dog sat"]);
    let mut scorer = BlockScorer::new(&collation, cat_dog_candidates());

    assert_eq!(scorer.prepare_witness("A")?, 2);
    let before: Vec<_> = (0..collation.stream_len())
        .map(|p| scorer.occurrence_of(p).cloned())
        .collect();

    assert_eq!(scorer.prepare_witness("A")?, 0);
    let after: Vec<_> = (0..collation.stream_len())
        .map(|p| scorer.occurrence_of(p).cloned())
        .collect();
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn test_align_errors() {
    let collation = collation_of(&["the cat sat", "the dog sat"]);
    let mut scorer = BlockScorer::new(&collation, cat_dog_candidates());

    assert_eq!(
        scorer.align("B", &[0]).unwrap_err(),
        CollateError::WitnessNotPrepared("B".to_string())
    );
    assert_eq!(
        scorer.align("Q", &[0]).unwrap_err(),
        CollateError::UnknownWitness("Q".to_string())
    );
    scorer.prepare_witness("B").unwrap();
    assert_eq!(
        scorer.align("B", &[0]).unwrap_err(),
        CollateError::WitnessNotPrepared("A".to_string())
    );
}

#[test]
fn test_wavefront_and_sequential_agree_through_session() -> Result<()> {
    let collation = collation_of(&["the cat sat on the mat", "the dog sat on a mat"]);
    // A = [0,6), B = [7,13)
    let candidates = vec![
        LcpCandidate::new(vec![2, 9], 2, 0),  // "sat on"
        LcpCandidate::new(vec![0, 7], 1, 1),  // "the"
        LcpCandidate::new(vec![5, 12], 1, 1), // "mat"
    ];

    let sequential_opt = CollateOpt {
        parallel_threshold: 0,
        ..CollateOpt::default()
    };
    let wavefront_opt = CollateOpt {
        parallel_threshold: 1,
        ..CollateOpt::default()
    };

    let mut tables = Vec::new();
    for opt in [sequential_opt, wavefront_opt] {
        let mut scorer = BlockScorer::with_options(&collation, candidates.clone(), opt)?;
        scorer.prepare_witness("A")?;
        scorer.prepare_witness("B")?;
        tables.push(scorer.align("B", &positions_of(&collation, "A"))?);
    }
    assert_eq!(tables[0], tables[1]);
    assert_eq!(tables[0].segments(), Some(3));
    Ok(())
}

#[test]
fn test_caller_driven_table() -> Result<()> {
    // An external driver can own the table and call score_cell itself
    let collation = collation_of(&["the cat sat", "the dog sat"]);
    let mut scorer = BlockScorer::new(&collation, cat_dog_candidates());
    scorer.prepare_witness("A")?;
    scorer.prepare_witness("B")?;

    let new_tokens = positions_of(&collation, "B");
    let super_tokens = positions_of(&collation, "A");
    let mut table = EditGraphTable::new(new_tokens.len(), super_tokens.len());
    for row in 0..table.rows() {
        for col in 0..table.cols() {
            let token_new = row.checked_sub(1).map(|i| new_tokens[i]);
            let token_super = col.checked_sub(1).map(|i| super_tokens[i]);
            let cell = scorer.score_cell(token_new, token_super, row, col, &table);
            table.set(row, col, cell);
        }
    }

    let filled = EditGraphTable::fill(&scorer.cell_scorer(), &new_tokens, &super_tokens);
    assert_eq!(table, filled);
    Ok(())
}

#[test]
fn test_custom_penalties() -> Result<()> {
    let collation = collation_of(&["the cat sat", "the dog sat"]);
    let opt = CollateOpt {
        gap_penalty: 2,
        substitution_penalty: 3,
        ..CollateOpt::default()
    };
    let mut scorer = BlockScorer::with_options(&collation, cat_dog_candidates(), opt)?;
    scorer.prepare_witness("A")?;
    scorer.prepare_witness("B")?;

    let index = scorer.index();
    let cell_scorer = CellScorer::new(index, scorer.options().scoring_params());
    let table = EditGraphTable::fill(
        &cell_scorer,
        &positions_of(&collation, "B"),
        &positions_of(&collation, "A"),
    );
    assert_eq!(table.cell(0, 3).map(|c| c.g), Some(-6));
    assert_eq!(table.score(), Some(-3));
    Ok(())
}
