// SPDX-FileCopyrightText: 2024 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod convert;
pub mod v1;

#[cfg(test)]
mod test {

    use prost::Message;

    use super::*;

    #[test]
    fn sub_message_size_bytes() {
        let sub = v1::SubMessage {
            flag: true,
            value: 42.1984,
        };
        let bytes = sub.encode_to_vec();
        assert_eq!(bytes.len(), 11);
    }

    #[test]
    fn default_sub_message_is_empty_on_the_wire() {
        let sub = v1::SubMessage::default();
        assert!(sub.encode_to_vec().is_empty());
    }

    #[test]
    fn sample_message_decodes_repeated_fields_in_order() {
        let message = v1::SampleMessage {
            tags: vec!["b".to_owned(), "a".to_owned()],
            subs: vec![
                v1::SubMessage {
                    flag: false,
                    value: 1.0,
                },
                v1::SubMessage {
                    flag: true,
                    value: 2.0,
                },
            ],
            ..Default::default()
        };
        let decoded = v1::SampleMessage::decode(message.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.tags, ["b", "a"]);
        assert_eq!(decoded.subs, message.subs);
        assert_eq!(decoded.meta, None);
    }
}
