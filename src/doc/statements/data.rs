/*!
# `DATA <literal>[,<literal>...]`

## Purpose
Holds constants for `READ` to pick up in order.

## Remarks
Items from every `DATA` line are pooled in program order when the
program is loaded, so `DATA` may sit anywhere. Only number and string
literals are allowed, a number may carry a leading minus.
Anything else stops the program from loading with
`SYNTAX ERROR; EXPECTED LITERAL`.
`DATA` does nothing when it is reached.

## Example
```text
10 READ N$, A
20 PRINT N$; A
30 DATA "NUGGET", -3
RUN
NUGGET-3
```

*/
