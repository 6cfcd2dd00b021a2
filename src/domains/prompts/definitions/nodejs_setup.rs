//! Node.js setup guide for the Resend SDK.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Markdown guide for wiring the Resend SDK into a Node.js project.
pub struct NodeJsSetupPrompt;

impl PromptDefinition for NodeJsSetupPrompt {
    const NAME: &'static str = "nodejs-setup-resend";
    const DESCRIPTION: &'static str =
        "Setup guide for the Resend SDK in a Node.js project: installation, client setup and first emails";

    fn template() -> &'static str {
        r#"# Setting up Resend in Node.js

Use this guide to add the Resend SDK to a Node.js project, send emails and manage contacts.

## Requirements

- Node.js 18 or later
- A Resend account with an API key

## Install the SDK

{{#if package_manager}}
```bash
{{package_manager}} add resend
```
{{else}}
With npm:

```bash
npm install resend
```

With yarn:

```bash
yarn add resend
```

With pnpm:

```bash
pnpm add resend
```
{{/if}}

## Create the client

Keep the API key out of source control and read it from the environment:

```.env
RESEND_API_KEY=re_xxxxxxxxx
```

```typescript
import { Resend } from 'resend';

const resend = new Resend(process.env.RESEND_API_KEY);
```

## Send an email

```typescript
const { data, error } = await resend.emails.send({
  from: 'onboarding@resend.dev',
  to: ['delivered@resend.dev'],
  subject: 'Hello from Resend',
  text: 'Hello world!',
});

if (error) {
  console.error('Resend API error:', error);
} else {
  console.log('Email sent:', data);
}
```

To schedule instead of sending right away, add `scheduledAt` with an ISO 8601
timestamp or a phrase such as `in 1 hour`. Emails can be scheduled up to 30 days ahead.

## Create a contact

```typescript
const { data, error } = await resend.contacts.create({
  email: 'user@example.com',
  firstName: 'Ada',
  lastName: 'Lovelace',
  unsubscribed: false,
  audienceId: 'your-audience-id',
});
```

## List audiences

```typescript
const { data, error } = await resend.audiences.list();
```

## TypeScript

Type definitions ship with the package:

```typescript
import type { CreateEmailOptions } from 'resend';

const options: CreateEmailOptions = {
  from: 'onboarding@resend.dev',
  to: 'user@example.com',
  subject: 'Typed email',
  text: 'Checked at compile time.',
};

await resend.emails.send(options);
```

## Handling errors

Every call resolves to `{ data, error }`. API failures (invalid key, unverified
domain, rate limits) come back in `error`; network failures throw, so wrap calls
in `try`/`catch` as well.

## Next steps

1. Create an API key in the [Resend dashboard](https://resend.com/api-keys)
2. Verify a sending domain
3. Set up audiences for your contacts
4. Read the [Resend documentation](https://resend.com/docs) for templates and webhooks
"#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "package_manager".to_string(),
            title: Some("Package manager".to_string()),
            description: Some(
                "Package manager used by the project (npm, yarn, pnpm, ...). All are shown when omitted"
                    .to_string(),
            ),
            required: Some(false),
        }]
    }
}
