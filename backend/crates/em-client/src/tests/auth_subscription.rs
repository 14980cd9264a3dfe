use crate::{AuthChange, AuthChannel, AuthNotification};

use em_core::Identity;

#[tokio::test]
async fn given_subscriber_when_change_published_then_received() {
    let channel = AuthChannel::default();
    let mut subscription = channel.subscribe();
    let change = AuthChange::signed_in(Identity::new("u1", None));

    assert_eq!(channel.publish(change.clone()), 1);
    assert_eq!(subscription.recv().await, AuthNotification::Change(change));
}

#[tokio::test]
async fn given_slow_subscriber_when_buffer_overflows_then_lagged_reported() {
    let channel = AuthChannel::new(1);
    let mut subscription = channel.subscribe();

    channel.publish(AuthChange::signed_in(Identity::new("u1", None)));
    channel.publish(AuthChange::signed_out());
    channel.publish(AuthChange::signed_in(Identity::new("u2", None)));

    assert_eq!(
        subscription.recv().await,
        AuthNotification::Lagged { skipped: 2 }
    );
    assert_eq!(
        subscription.recv().await,
        AuthNotification::Change(AuthChange::signed_in(Identity::new("u2", None)))
    );
}

#[tokio::test]
async fn given_channel_dropped_when_receiving_then_closed() {
    let channel = AuthChannel::default();
    let mut subscription = channel.subscribe();

    drop(channel);

    assert_eq!(subscription.recv().await, AuthNotification::Closed);
}

#[test]
fn given_unsubscribe_then_subscriber_count_drops() {
    let channel = AuthChannel::default();
    let subscription = channel.subscribe();
    assert_eq!(channel.subscriber_count(), 1);

    subscription.unsubscribe();

    assert_eq!(channel.subscriber_count(), 0);
    assert_eq!(channel.publish(AuthChange::signed_out()), 0);
}
