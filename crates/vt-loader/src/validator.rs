use vt_protocol::DataRequest;

/// Rejects a chunk reply whose originating request no longer matches the
/// current active template (sort fields, sort directions, filters,
/// generation). Rejected replies are dropped silently by the caller; this
/// function only answers the yes/no question and logs the rejection so the
/// core "may log" per §4.5/§7 without owning any state itself.
pub fn accepts(reply_request: &DataRequest, active_template: &DataRequest) -> bool {
    let accepted = reply_request.matches_template(active_template);
    if !accepted {
        tracing::warn!(
            target: "loader.validate",
            reply_generation = reply_request.generation,
            active_generation = active_template.generation,
            "rejecting stale chunk reply"
        );
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_template() {
        let active = DataRequest::new(0, 8, 3);
        let reply = active.with_range(16, 8);
        assert!(accepts(&reply, &active));
    }

    #[test]
    fn rejects_stale_generation() {
        let active = DataRequest::new(0, 8, 3);
        let reply = DataRequest::new(16, 8, 2);
        assert!(!accepts(&reply, &active));
    }
}
