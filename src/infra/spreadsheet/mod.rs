pub mod xlsx_adapter;
