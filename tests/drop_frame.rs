use timecode::{
    Components, FrameRate, StringFormat, Timecode, TimecodeError, TimecodeField, Validation,
};

const DROP_RATES: [FrameRate; 6] = [
    FrameRate::Fps29_97Drop,
    FrameRate::Fps30Drop,
    FrameRate::Fps59_94Drop,
    FrameRate::Fps60Drop,
    FrameRate::Fps119_88Drop,
    FrameRate::Fps120Drop,
];

#[test]
fn test_first_frame_after_drop_follows_last_frame_before() {
    for rate in DROP_RATES {
        let dropped = rate.frames_dropped_per_minute();
        let before = Timecode::new(Components::hmsf(0, 0, 59, rate.max_frames() - 1), rate)
            .unwrap()
            .frame_count();
        let after = Timecode::new(Components::hmsf(0, 1, 0, dropped), rate)
            .unwrap()
            .frame_count();
        assert_eq!(after.whole_frames(), before.whole_frames() + 1, "{rate}");
    }
}

#[test]
fn test_dropped_frame_counts() {
    assert_eq!(FrameRate::Fps29_97Drop.frames_dropped_per_minute(), 2);
    assert_eq!(FrameRate::Fps59_94Drop.frames_dropped_per_minute(), 4);
    assert_eq!(FrameRate::Fps119_88Drop.frames_dropped_per_minute(), 8);

    let cases = [
        ("00:01:00;02", FrameRate::Fps29_97Drop, 1800),
        ("00:01:00;04", FrameRate::Fps59_94Drop, 3600),
        ("00:01:00;008", FrameRate::Fps119_88Drop, 7200),
        ("00:10:00;00", FrameRate::Fps29_97Drop, 17_982),
        ("00:10:00;00", FrameRate::Fps59_94Drop, 35_964),
        ("00:10:00;000", FrameRate::Fps119_88Drop, 71_928),
        ("01:00:00;00", FrameRate::Fps29_97Drop, 107_892),
    ];
    for (input, rate, expected) in cases {
        let tc = Timecode::new(input, rate).unwrap();
        assert_eq!(tc.frame_count().whole_frames(), expected, "{input} at {rate}");
        assert_eq!(tc.to_string(), input);
    }
}

#[test]
fn test_dropped_frame_numbers_are_invalid() {
    let err = Timecode::new("00:01:00;00", FrameRate::Fps29_97Drop).unwrap_err();
    assert_eq!(
        err,
        TimecodeError::OutOfBounds {
            fields: vec![TimecodeField::Frame]
        }
    );

    let tc = Timecode::new_by(
        "00:01:00;01",
        FrameRate::Fps29_97Drop,
        Validation::ClampComponents,
    )
    .unwrap();
    assert_eq!(tc.to_string(), "00:01:00;02");

    // Every tenth minute keeps its frame numbers
    assert!(Timecode::new("00:20:00;00", FrameRate::Fps29_97Drop).is_ok());
}

#[test]
fn test_full_day() {
    let last = Timecode::new("23:59:59;29", FrameRate::Fps29_97Drop).unwrap();
    assert_eq!(last.frame_count().whole_frames(), 2_589_407);

    let mut tc = last;
    tc.offset(1, Validation::Wrap).unwrap();
    assert!(tc.is_zero());
}

#[test]
fn test_drop_frame_real_time() {
    let tc = Timecode::new("00:01:00;02", FrameRate::Fps30Drop).unwrap();
    assert!((tc.real_time_value() - 60.0).abs() < 1e-12);

    let tc = Timecode::new("00:01:00;02", FrameRate::Fps29_97Drop).unwrap();
    assert!((tc.real_time_value() - 60.06).abs() < 1e-9);
}

#[test]
fn test_drop_frame_filename() {
    let tc = Timecode::new("00:01:00;02.40", FrameRate::Fps29_97Drop).unwrap();
    assert_eq!(
        tc.string_value(StringFormat::FILENAME.sub_frames(true)),
        "00-01-00-02.40"
    );
}
