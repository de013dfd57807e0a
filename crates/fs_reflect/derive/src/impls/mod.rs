mod record_impl;

pub(crate) use record_impl::impl_record;
