//! End-to-end electorate scenarios over the full machine, including the
//! signature path.

use rcv_crypto::{sign_ballot, signing_key_from_seed, voter_address};
use rcv_election::{ElectionError, ElectionMachine};
use rcv_types::{ElectionParams, Epoch, Timestamp, VoterAddress};

const COOLDOWN: u64 = 1000;

/// Voter identity for index `i` (distinct from every candidate address).
fn voter(i: usize) -> VoterAddress {
    let mut bytes = [0u8; 20];
    bytes[0] = 0xA0;
    bytes[18] = (i >> 8) as u8;
    bytes[19] = i as u8;
    VoterAddress::new(bytes)
}

/// Candidate identity `Cn`.
fn candidate(n: u8) -> VoterAddress {
    let mut bytes = [0u8; 20];
    bytes[0] = 0xC0;
    bytes[19] = n;
    VoterAddress::new(bytes)
}

fn admin() -> VoterAddress {
    VoterAddress::new([0xAD; 20])
}

fn deploy(voter_count: usize) -> ElectionMachine {
    let voters = (0..voter_count).map(voter).collect();
    let params = ElectionParams {
        max_candidates: 10,
        cooldown_secs: COOLDOWN,
    };
    ElectionMachine::new(voters, admin(), Timestamp::new(0), params)
}

fn after_cooldown() -> Timestamp {
    Timestamp::new(COOLDOWN + 1)
}

#[test]
fn majority_first_choice_block_survives_elimination() {
    let mut m = deploy(100);

    // 60 voters back C0 outright, 39 back C3; one voter abstains.
    for i in 0..60 {
        m.record_ballot(voter(i), vec![candidate(0), candidate(1), candidate(2)])
            .unwrap();
    }
    for i in 60..99 {
        m.record_ballot(voter(i), vec![candidate(3), candidate(1), candidate(4)])
            .unwrap();
    }

    let winner = m.trigger_election(after_cooldown()).unwrap();
    assert_eq!(winner, candidate(0));
    assert_eq!(m.current_winner(), candidate(0));
}

#[test]
fn broad_second_choice_support_wins() {
    let mut m = deploy(100);

    // Five equal blocks of 20 with distinct first choices; every block
    // outside C1's own ranks C1 second. C1 absorbs each eliminated
    // block's votes and overtakes the rest.
    for i in 0..20 {
        m.record_ballot(voter(i), vec![candidate(0), candidate(1)])
            .unwrap();
    }
    for i in 20..40 {
        m.record_ballot(voter(i), vec![candidate(1)]).unwrap();
    }
    for i in 40..60 {
        m.record_ballot(voter(i), vec![candidate(2), candidate(1)])
            .unwrap();
    }
    for i in 60..80 {
        m.record_ballot(voter(i), vec![candidate(3), candidate(1)])
            .unwrap();
    }
    for i in 80..100 {
        m.record_ballot(voter(i), vec![candidate(4), candidate(1)])
            .unwrap();
    }

    let winner = m.trigger_election(after_cooldown()).unwrap();
    assert_eq!(winner, candidate(1));
}

#[test]
fn duplicate_candidate_recorded_but_not_double_counted() {
    let mut m = deploy(2);

    // Recording succeeds with the duplicate intact…
    m.record_ballot(voter(0), vec![candidate(1), candidate(1)])
        .unwrap();
    assert_eq!(m.ballot(&voter(0)), &[candidate(1), candidate(1)]);

    // …and grants no extra tally: counted once, C1 ties C2 and loses the
    // pool-order tie-break; counted twice it would have won.
    m.record_ballot(voter(1), vec![candidate(2)]).unwrap();
    let winner = m.trigger_election(after_cooldown()).unwrap();
    assert_eq!(winner, candidate(2));
}

#[test]
fn self_nomination_is_recorded() {
    let mut m = deploy(2);
    m.record_ballot(voter(0), vec![voter(0)]).unwrap();
    assert_eq!(m.ballot(&voter(0)), &[voter(0)]);

    let winner = m.trigger_election(after_cooldown()).unwrap();
    assert_eq!(winner, voter(0));
}

#[test]
fn captured_signature_replays_the_same_ballot() {
    let key = signing_key_from_seed(&[5u8; 32]).unwrap();
    let signer = voter_address(key.verifying_key());

    let params = ElectionParams {
        max_candidates: 10,
        cooldown_secs: COOLDOWN,
    };
    let mut m = ElectionMachine::new(vec![signer], admin(), Timestamp::new(0), params);

    let original = vec![candidate(1), candidate(2)];
    let sig = sign_ballot(&key, &original).unwrap();
    m.record_ballot_with_signature(original.clone(), &sig)
        .unwrap();

    // The voter changes their mind directly…
    m.record_ballot(signer, vec![candidate(3)]).unwrap();
    assert_eq!(m.ballot(&signer), &[candidate(3)]);

    // …and anyone holding the captured signature restores the old ranking.
    // The signed payload has no nonce, so within an epoch the replay is
    // indistinguishable from a fresh submission.
    m.record_ballot_with_signature(original.clone(), &sig)
        .unwrap();
    assert_eq!(m.ballot(&signer), original.as_slice());
}

#[test]
fn two_epoch_lifecycle() {
    let mut m = deploy(3);

    // Epoch 0.
    m.record_ballot(voter(0), vec![candidate(1)]).unwrap();
    m.record_ballot(voter(1), vec![candidate(1)]).unwrap();
    m.record_ballot(voter(2), vec![candidate(2)]).unwrap();
    let first = m.trigger_election(Timestamp::new(COOLDOWN + 1)).unwrap();
    assert_eq!(first, candidate(1));
    assert_eq!(m.epoch(), Epoch::new(1));

    // The next election is gated on a fresh cooldown from the first.
    assert!(matches!(
        m.trigger_election(Timestamp::new(COOLDOWN + 2)),
        Err(ElectionError::ElectionNotYetDue { .. })
    ));

    // Epoch 1: a different electorate outcome replaces the winner.
    m.record_ballot(voter(0), vec![candidate(2)]).unwrap();
    m.record_ballot(voter(1), vec![candidate(2)]).unwrap();
    let second = m
        .trigger_election(Timestamp::new(2 * COOLDOWN + 2))
        .unwrap();
    assert_eq!(second, candidate(2));
    assert_eq!(m.epoch(), Epoch::new(2));
    assert_eq!(m.current_winner(), candidate(2));
}

#[test]
fn signed_and_direct_submissions_mix() {
    let key = signing_key_from_seed(&[6u8; 32]).unwrap();
    let signer = voter_address(key.verifying_key());

    let params = ElectionParams {
        max_candidates: 10,
        cooldown_secs: COOLDOWN,
    };
    let mut m = ElectionMachine::new(
        vec![signer, voter(0), voter(1)],
        admin(),
        Timestamp::new(0),
        params,
    );

    let ranked = vec![candidate(7)];
    let sig = sign_ballot(&key, &ranked).unwrap();
    m.record_ballot_with_signature(ranked, &sig).unwrap();
    m.record_ballot(voter(0), vec![candidate(7)]).unwrap();
    m.record_ballot(voter(1), vec![candidate(8)]).unwrap();

    let winner = m.trigger_election(after_cooldown()).unwrap();
    assert_eq!(winner, candidate(7));
}
