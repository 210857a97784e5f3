//! Authoritative REST API error catalog
//!
//! This is the single source of truth for the taxonomy shared between the
//! REST gateway and the validator-facing code generated from it. Entries are
//! declared in api_code order; the extractor sorts by name, so declaration
//! order here never influences the emitted artifact.
//!
//! api_codes are wire-stable: once published they are never renumbered or
//! reused, which is why the sequence has gaps.

use super::definition::RawErrorDefinition;

const fn def(
    name: &'static str,
    api_code: u8,
    status_code: u16,
    title: &'static str,
    message: &'static str,
) -> RawErrorDefinition {
    RawErrorDefinition {
        name,
        api_code: Some(api_code),
        status_code: Some(status_code),
        title: Some(title),
        message: Some(message),
    }
}

pub static CATALOG: &[RawErrorDefinition] = &[
    def(
        "UnknownValidatorError",
        10,
        500,
        "Unknown Validator Error",
        "An unknown error occurred with the validator while processing your request.",
    ),
    def(
        "ValidatorNotReady",
        15,
        503,
        "Validator Not Ready",
        "The validator has no genesis block, and is not yet ready to be queried. \
         Try your request again later.",
    ),
    def(
        "ValidatorTimedOut",
        17,
        503,
        "Validator Timed Out",
        "The request timed out while waiting for a response from the validator. \
         Your request may or may not have been processed.",
    ),
    def(
        "ValidatorDisconnected",
        18,
        503,
        "Validator Disconnected",
        "The validator disconnected before sending a response. Try your request again later.",
    ),
    def(
        "SendBackoffTimeout",
        19,
        408,
        "Send timed out",
        "Sending message to validator timed out. Retry limit reached. \
         Try your request again later.",
    ),
    def(
        "ValidatorResponseInvalid",
        20,
        500,
        "Invalid Validator Response",
        "The response from the validator could not be decoded. It may \
         have been corrupted or compromised.",
    ),
    def(
        "ResourceHeaderInvalid",
        21,
        500,
        "Invalid Resource Header",
        "The resource fetched from the validator had an invalid header, and may be corrupted.",
    ),
    def(
        "StatusResponseMissing",
        27,
        500,
        "Unable to Fetch Statuses",
        "An unknown error occurred while attempting to fetch batch \
         statuses, and nothing was returned.",
    ),
    def(
        "SubmittedBatchesInvalid",
        30,
        400,
        "Submitted Batches Invalid",
        "The submitted BatchList was rejected by the validator. It was \
         poorly formed, or has an invalid signature.",
    ),
    def(
        "BatchQueueFull",
        31,
        429,
        "Unable to Accept Batches",
        "The validator cannot currently accept more batches, due to a \
         full queue.  Please submit your request again.",
    ),
    def(
        "NoBatchesSubmitted",
        34,
        400,
        "No Batches Submitted",
        "The protobuf BatchList you submitted was empty and contained \
         no Batches. You must submit at least one Batch.",
    ),
    def(
        "BadProtobufSubmitted",
        35,
        400,
        "Protobuf Not Decodable",
        "The protobuf BatchList you submitted was malformed and could not be read.",
    ),
    def(
        "SubmissionWrongContentType",
        42,
        400,
        "Wrong Content Type",
        "Batches must be submitted in a BatchList protobuf binary, \
         with a 'Content-Type' header of 'application/octet-stream'.",
    ),
    def(
        "StatusWrongContentType",
        43,
        400,
        "Wrong Content Type",
        "Requests for batch statuses sent as a POST must have a \
         'Content-Type' header of 'application/json'.",
    ),
    def(
        "StatusBodyInvalid",
        46,
        400,
        "Bad Status Request",
        "Requests for batch statuses sent as a POST must have a JSON \
         formatted body with an array of at least one id string.",
    ),
    def(
        "HeadNotFound",
        50,
        404,
        "Head Not Found",
        "There is no block with the id specified in the 'head' query parameter.",
    ),
    def(
        "CountInvalid",
        53,
        400,
        "Invalid Count Query",
        "The 'count' query parameter must be a positive, non-zero integer.",
    ),
    def(
        "PagingInvalid",
        54,
        400,
        "Invalid Paging Query",
        "Paging request failed as written. One or more of the \
         'min', 'max', or 'count' query parameters were invalid or \
         out of range.",
    ),
    def(
        "SortInvalid",
        57,
        400,
        "Invalid Sort Query",
        "The sort request failed as written. Some of the keys specified were not valid.",
    ),
    def(
        "InvalidResourceId",
        60,
        400,
        "Invalid Resource Id",
        "Blockchain items are identified by 128 character hex-strings. \
         A submitted block, batch, or transaction id was invalid: ",
    ),
    def(
        "InvalidStateAddress",
        62,
        400,
        "Invalid State Address",
        "The state address submitted was invalid. To fetch specific \
         state data, you must submit the full 70-character address.",
    ),
    def(
        "StatusIdQueryInvalid",
        66,
        400,
        "Id Query Invalid or Missing",
        "Requests for batch statuses sent as a GET request must have \
         an 'id' query parameter with a comma-separated list of \
         at least one batch id.",
    ),
    def(
        "BlockNotFound",
        70,
        404,
        "Block Not Found",
        "There is no block with the id specified in the blockchain.",
    ),
    def(
        "BatchNotFound",
        71,
        404,
        "Batch Not Found",
        "There is no batch with the id specified in the blockchain.",
    ),
    def(
        "TransactionNotFound",
        72,
        404,
        "Transaction Not Found",
        "There is no transaction with the id specified in the blockchain.",
    ),
    def(
        "StateNotFound",
        75,
        404,
        "State Not Found",
        "There is no state data at the address specified.",
    ),
    def(
        "ReceiptNotFound",
        80,
        404,
        "Transaction Receipt Not Found",
        "There is no transaction receipt for the transaction id \
         specified in the receipt store.",
    ),
    def(
        "ReceiptWrongContentType",
        81,
        400,
        "Wrong Content Type",
        "Requests for transaction receipts sent as a POST must have a \
         'Content-Type' header of 'application/json'.",
    ),
    def(
        "ReceiptBodyInvalid",
        82,
        400,
        "Bad Receipts Request",
        "Requests for transaction receipts sent as a POST must have a \
         JSON formatted body with an array of at least one id string.",
    ),
    def(
        "ReceiptIdQueryInvalid",
        83,
        400,
        "Id Query Invalid or Missing",
        "Requests for transaction receipts sent as a GET request must \
         have an 'id' query parameter with a comma-separated list of \
         at least one transaction id.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(CATALOG.len(), 30);
    }

    #[test]
    fn test_catalog_entries_are_complete() {
        for raw in CATALOG {
            assert!(raw.is_complete(), "incomplete entry: {}", raw.name);
        }
    }

    #[test]
    fn test_catalog_is_declared_in_api_code_order() {
        let codes: Vec<u8> = CATALOG.iter().map(|d| d.api_code.unwrap()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_declaration_order_is_not_alphabetical() {
        // The extractor's sort step must be doing real work
        let names: Vec<&str> = CATALOG.iter().map(|d| d.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_ne!(names, sorted);
    }
}
