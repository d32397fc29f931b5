use vitalscope::error::MonitorError;
use vitalscope::{Channel, ChannelColor, ChannelSet};

fn chan(label: &str, n: usize) -> Channel {
    Channel::new((0..n).map(|i| i as f64).collect(), label)
}

#[test]
fn add_returns_dense_indices() {
    let mut set = ChannelSet::new();
    assert_eq!(set.add(chan("a", 10)).unwrap(), 0);
    assert_eq!(set.add(chan("b", 10)).unwrap(), 1);
    assert_eq!(set.add(chan("c", 10)).unwrap(), 2);
    assert_eq!(set.len(), 3);
}

#[test]
fn add_rejects_empty_samples() {
    let mut set = ChannelSet::new();
    let err = set.add(Channel::new(Vec::new(), "empty")).unwrap_err();
    assert!(matches!(err, MonitorError::InvalidInput(_)));
    assert!(set.is_empty());
}

#[test]
fn attributes_stay_in_correspondence_across_mutations() {
    let mut set = ChannelSet::new();
    set.add(chan("a", 10)).unwrap();
    set.add(chan("b", 10)).unwrap();
    set.add(chan("c", 10)).unwrap();
    set.set_color(0, ChannelColor::Blue).unwrap();
    set.set_visible(1, false).unwrap();
    set.rename(2, "renamed").unwrap();

    // Removing the middle channel must shift the later one down intact.
    let removed = set.remove(1).unwrap();
    assert_eq!(removed.label, "b");
    assert!(!removed.visible);

    assert_eq!(set.labels(), vec!["a".to_string(), "renamed".to_string()]);
    assert_eq!(set.get(0).unwrap().color, ChannelColor::Blue);
    assert_eq!(set.get(1).unwrap().label, "renamed");
    assert!(set.get(1).unwrap().visible);
}

#[test]
fn index_errors_leave_state_untouched() {
    let mut set = ChannelSet::new();
    set.add(chan("a", 10)).unwrap();

    assert!(matches!(
        set.remove(5),
        Err(MonitorError::IndexOutOfRange { index: 5, len: 1 })
    ));
    assert!(matches!(
        set.rename(1, "x"),
        Err(MonitorError::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        set.set_color(1, ChannelColor::Green),
        Err(MonitorError::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        set.set_visible(1, false),
        Err(MonitorError::IndexOutOfRange { .. })
    ));
    assert_eq!(set.len(), 1);
    assert_eq!(set.get(0).unwrap().label, "a");
}

#[test]
fn window_clamps_to_available_samples() {
    let mut set = ChannelSet::new();
    set.add(chan("a", 100)).unwrap();

    assert_eq!(set.window(0, 0, 10).unwrap(), &(0..10).map(|i| i as f64).collect::<Vec<_>>()[..]);
    // Slice past the end truncates instead of erroring.
    assert_eq!(set.window(0, 95, 10).unwrap().len(), 5);
    assert!(set.window(0, 200, 10).unwrap().is_empty());
    assert!(matches!(
        set.window(3, 0, 10),
        Err(MonitorError::IndexOutOfRange { .. })
    ));
}

#[test]
fn value_extent_spans_all_channels() {
    let mut set = ChannelSet::new();
    assert_eq!(set.value_extent(), None);
    set.add(Channel::new(vec![1.0, 2.0, 3.0], "a")).unwrap();
    set.add(Channel::new(vec![-5.0, 0.5, 0.7], "b")).unwrap();
    assert_eq!(set.value_extent(), Some((-5.0, 3.0)));
}
